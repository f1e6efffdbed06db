use head_tap::{
    abnf::{CRLF, HEADER_FS, SP},
    header_map::HeaderMap,
    version::Version,
};

/* Renders the current mutated state, never the original wire bytes:
 *
 *      METHOD SP target SP HTTP/1.x CRLF
 *      Name: Value CRLF
 *      ...
 *      CRLF
 *
 * Pure and repeatable, callable for logging and for the forwarded head.
 */
pub fn render_request_head(
    method: &str,
    target: &str,
    version: Version,
    headers: &HeaderMap,
) -> String {
    let mut size = method.len() + target.len() + version.as_str().len() + 4;
    for header in headers.headers() {
        size += header.len();
    }
    let mut out = String::with_capacity(size + 2);
    out.push_str(method);
    out.push(SP);
    out.push_str(target);
    out.push(SP);
    out.push_str(version.as_str());
    out.push_str(CRLF);
    for header in headers.headers() {
        out.push_str(header.key_as_str());
        out.push_str(HEADER_FS);
        out.push_str(header.value_as_str());
        out.push_str(CRLF);
    }
    out.push_str(CRLF);
    out
}
