use bytes::Bytes;
use head_tap::version::Version;
use request_tap::{Message, Request};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn request(head: &str) -> Request {
    Request::parse(Bytes::copy_from_slice(head.as_bytes())).unwrap()
}

#[test]
fn test_e2e_explicit_proxy_get() {
    init_tracing();
    let req = request(
        "GET /foo HTTP/1.1\r\n\
         Host: example.com\r\n\r\n",
    );
    assert_eq!(req.method(), "GET");
    assert_eq!(req.version(), Version::H11);
    assert!(!req.has_body());
    assert_eq!(req.request_uri().unwrap().to_string(), "http://example.com/foo");
}

#[test]
fn test_e2e_lowercase_post_transport_authority() {
    init_tracing();
    let mut req = request("post /submit http/1.0\r\n\r\n");
    req.set_authority("api.example.com");
    assert_eq!(req.method(), "POST");
    assert_eq!(req.version(), Version::H10);
    assert!(req.has_body());
    assert_eq!(
        req.request_uri().unwrap().to_string(),
        "http://api.example.com/submit"
    );
}

#[test]
fn test_e2e_rewrite_syncs_host_and_scheme() {
    init_tracing();
    let mut req = request(
        "GET http://old.test/a HTTP/1.1\r\n\
         Host: old.test\r\n\r\n",
    );
    assert!(!req.is_https());
    req.set_url("https://new.test/b").unwrap();
    assert_eq!(req.host(), Some("new.test"));
    assert!(req.is_https());
    assert_eq!(req.original_url(), "http://old.test/a");
}

#[test]
fn test_e2e_header_text_reflects_mutation() {
    let mut req = request(
        "GET http://old.test/a HTTP/1.1\r\n\
         Host: old.test\r\n\
         Accept: */*\r\n\r\n",
    );
    req.set_url("https://new.test/b").unwrap();
    req.headers_mut().unwrap().set_or_add("Accept", "text/html");
    req.lock();
    assert_eq!(
        req.header_text(),
        "GET https://new.test/b HTTP/1.1\r\n\
         Host: new.test\r\n\
         Accept: text/html\r\n\r\n"
    );
    // repeatable, the render is pure
    assert_eq!(req.header_bytes(), req.header_text().as_bytes());
}

#[test]
fn test_e2e_forward_order_head_then_body() {
    let mut req = request(
        "POST /upload HTTP/1.1\r\n\
         Host: example.com\r\n\
         Content-Length: 5\r\n\r\n",
    );
    req.store_body(Bytes::from_static(b"hello")).unwrap();
    req.lock();
    let mut wire = req.header_bytes().to_vec();
    wire.extend_from_slice(req.body().unwrap());
    assert_eq!(
        wire,
        b"POST /upload HTTP/1.1\r\n\
          Host: example.com\r\n\
          Content-Length: 5\r\n\r\nhello"
    );
}
