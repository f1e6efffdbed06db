use std::borrow::Cow;

use bytes::Bytes;
use tracing::debug;

use head_tap::{
    abnf::{CRLF, FORWARD_SLASH},
    const_headers::{EXPECT_100_CONTINUE, HOST, MULTIPART_FORM_DATA, UPGRADE_WEBSOCKET},
    header_map::HeaderMap,
    methods::POST,
    request_line::RequestLine,
    scheme::{self, is_https_scheme, uri_scheme},
    uri::{InvalidUri, Uri},
    version::Version,
};
use view_tap::ByteView;

use crate::{
    error::MessageError,
    message::{Message, MessageCore},
    serializer,
};

// Client request as seen by the interception pipeline. One instance per
// inbound request, never reused across keep-alive exchanges.
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub struct Request {
    core: MessageCore,
    method: ByteView,
    original_target: ByteView,
    target: ByteView,
    is_https: bool,
    authority: Option<String>,
    cancel_request: bool,
    expectation_succeeded: bool,
    expectation_failed: bool,
}

impl Request {
    /* Steps:
     *      1. Parse the request line.
     *      2. Build the HeaderMap from the raw block.
     *      3. Seed both target views from the wire target.
     */
    pub fn new(line: &ByteView, block: ByteView) -> Result<Request, MessageError> {
        let (method, target, version) = RequestLine::parse(line)?.into_parts();
        let mut request = Request {
            core: MessageCore::new(HeaderMap::from(block), version),
            method,
            original_target: target.clone(),
            target: ByteView::new(),
            is_https: false,
            authority: None,
            cancel_request: false,
            expectation_succeeded: false,
            expectation_failed: false,
        };
        request.assign_target(target);
        Ok(request)
    }

    /* Convenience splitter for a full head block.
     *
     * Steps:
     *      1. Split at the first CRLF: request line | header block.
     *      2. No CRLF => the whole buffer is the request line, empty
     *         block.
     */
    pub fn parse(head: Bytes) -> Result<Request, MessageError> {
        let head = ByteView::from(head);
        match head
            .as_ref()
            .windows(2)
            .position(|window| window == CRLF.as_bytes())
        {
            Some(index) => Request::new(&head.slice(..index), head.slice(index + 2..)),
            None => Request::new(&head, ByteView::new()),
        }
    }

    // Normalized at parse, valid utf8.
    pub fn method(&self) -> &str {
        self.method.as_str().unwrap()
    }

    // Target exactly as received, immutable for the session.
    pub fn original_url(&self) -> Cow<'_, str> {
        self.original_target.to_text()
    }

    // Target as currently active.
    pub fn url(&self) -> Cow<'_, str> {
        self.target.to_text()
    }

    pub fn is_https(&self) -> bool {
        self.is_https
    }

    // Transport sets this for TLS-terminated sessions whose targets are
    // origin-form and never carry a scheme.
    pub fn set_https(&mut self, is_https: bool) {
        self.is_https = is_https;
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    // Out-of-band target host, known from CONNECT or the TLS handshake.
    pub fn set_authority(&mut self, authority: impl Into<String>) {
        self.authority = Some(authority.into());
    }

    // Single mutation point for the target, keeps the cached flag in
    // step with the view. A scheme-less target leaves the previous flag
    // alone: origin-form rewrites under an intercepted TLS session stay
    // https.
    fn assign_target(&mut self, target: ByteView) {
        if let Some(scheme) = uri_scheme(&target) {
            self.is_https = is_https_scheme(&scheme);
        }
        self.target = target;
    }

    /* Steps:
     *      1. Locked => Locked.
     *      2. A present Host header must follow the rewrite: the new
     *         value has to parse as an absolute uri and its authority
     *         overwrites Host. Parse first, nothing is touched on
     *         failure. No Host header => none is created.
     *      3. Re-seat the target view (recomputes the https flag).
     */
    pub fn set_url(&mut self, url: &str) -> Result<(), MessageError> {
        if self.locked() {
            return Err(MessageError::Locked);
        }
        let new_target = ByteView::from(url);
        if self.headers().host().is_some() {
            let uri = Uri::parse(&new_target).map_err(|source| MessageError::InvalidUri {
                text: url.to_string(),
                source,
            })?;
            let authority = uri.authority().to_string();
            self.headers_mut()?.set_or_add(HOST, &authority);
        }
        debug!("url rewrite| {} -> {}", self.url(), url);
        self.assign_target(new_target);
        Ok(())
    }

    pub fn host(&self) -> Option<&str> {
        self.headers().host()
    }

    pub fn set_host(&mut self, host: &str) -> Result<(), MessageError> {
        self.headers_mut()?.set_or_add(HOST, host);
        Ok(())
    }

    /* Absolute request uri.
     *
     * Steps:
     *      1. Target carries a scheme => parse it directly.
     *      2. Origin-form => scheme://(Host else authority) + path,
     *         error when neither host source exists.
     *      3. Anything else passes through and surfaces the parse
     *         failure with the offending text.
     */
    pub fn request_uri(&self) -> Result<Uri, MessageError> {
        let url = self.url();
        let absolute: Cow<'_, str> = if uri_scheme(&self.target).is_some() {
            url
        } else if url.starts_with(FORWARD_SLASH) {
            let protocol = if self.is_https {
                scheme::HTTPS
            } else {
                scheme::HTTP
            };
            let host = self
                .headers()
                .host()
                .or(self.authority.as_deref())
                .ok_or_else(|| MessageError::InvalidUri {
                    text: url.to_string(),
                    source: InvalidUri::MissingAuthority,
                })?;
            Cow::Owned(format!("{}://{}{}", protocol, host, url))
        } else {
            url
        };
        Uri::parse(&ByteView::from(absolute.as_ref())).map_err(|source| {
            MessageError::InvalidUri {
                text: absolute.into_owned(),
                source,
            }
        })
    }

    // Pure functions of the header collection, recomputed per access.
    pub fn expects_continue(&self) -> bool {
        self.headers().expect() == Some(EXPECT_100_CONTINUE)
    }

    pub fn is_multipart_form_data(&self) -> bool {
        self.headers()
            .content_type()
            .is_some_and(|value| value.starts_with(MULTIPART_FORM_DATA))
    }

    pub fn upgrades_to_websocket(&self) -> bool {
        self.headers()
            .upgrade()
            .is_some_and(|value| value.eq_ignore_ascii_case(UPGRADE_WEBSOCKET))
    }

    // Advisory flag, checked by the forwarder before transmitting.
    pub fn cancel_request(&self) -> bool {
        self.cancel_request
    }

    pub fn set_cancel_request(&mut self, cancel: bool) {
        self.cancel_request = cancel;
    }

    // Outcome of a prior 100-continue negotiation.
    pub fn expectation_succeeded(&self) -> bool {
        self.expectation_succeeded
    }

    pub fn expectation_failed(&self) -> bool {
        self.expectation_failed
    }

    pub fn mark_expectation_succeeded(&mut self) {
        self.expectation_succeeded = true;
    }

    pub fn mark_expectation_failed(&mut self) {
        self.expectation_failed = true;
    }
}

impl Message for Request {
    fn core(&self) -> &MessageCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MessageCore {
        &mut self.core
    }

    /* Body presence policy:
     *      Content-Length 0 => no body, overriding every other signal.
     *      Chunked or a positive Content-Length => body.
     *      POST + HTTP/1.0 without an explicit length => body, read
     *      until close, the caller has to drain it.
     */
    fn has_body(&self) -> bool {
        match self.headers().content_length() {
            Some(0) => false,
            Some(_) => true,
            None => {
                self.headers().is_chunked()
                    || (self.method() == POST && self.version() == Version::H10)
            }
        }
    }

    fn header_text(&self) -> String {
        serializer::render_request_head(self.method(), &self.url(), self.version(), self.headers())
    }
}
