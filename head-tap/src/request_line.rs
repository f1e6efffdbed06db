use std::borrow::Cow;

use thiserror::Error;
use view_tap::ByteView;

use crate::{abnf::SP, version::Version};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestLineError {
    // not even a method/target separator
    #[error("missing target: {0}")]
    MissingTarget(String),
}

// Parsed request line. Method and target alias the line buffer whenever
// the line is valid utf8.
#[derive(Debug, PartialEq, Eq)]
pub struct RequestLine {
    method: ByteView,
    target: ByteView,
    version: Version,
}

/* Steps:
 *      1. Find the first SP. None => MissingTarget.
 *      2. Find the last SP.
 *      3. Same index => target is everything after it, version 1.1.
 *      4. Otherwise target sits strictly between the two and the
 *         trailing token selects the version (only HTTP/1.0 is
 *         significant, compared case-insensitively).
 *
 * The method is uppercased unless already all A-Z, so mixed-case
 * methods on the wire normalize exactly once.
 */
impl RequestLine {
    pub fn parse(line: &ByteView) -> Result<RequestLine, RequestLineError> {
        let text = line.to_text();
        let first = text
            .find(SP)
            .ok_or_else(|| RequestLineError::MissingTarget(text.to_string()))?;
        let last = text.rfind(SP).unwrap_or(first);

        let (target_range, version) = if first == last {
            (first + 1..text.len(), Version::default())
        } else {
            (first + 1..last, Version::from_token(&text[last + 1..]))
        };

        // Borrowed means the line was valid utf8 and byte offsets line up
        // with the original buffer.
        let borrowed = matches!(text, Cow::Borrowed(_));

        let method_text = &text[..first];
        let method = if !is_all_upper(method_text.as_bytes()) {
            ByteView::from(method_text.to_ascii_uppercase())
        } else if borrowed {
            line.slice(..first)
        } else {
            ByteView::from(method_text)
        };

        let target = if borrowed {
            line.slice(target_range)
        } else {
            ByteView::from(&text[target_range])
        };

        Ok(RequestLine {
            method,
            target,
            version,
        })
    }

    pub fn method(&self) -> &ByteView {
        &self.method
    }

    pub fn target(&self) -> &ByteView {
        &self.target
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn into_parts(self) -> (ByteView, ByteView, Version) {
        (self.method, self.target, self.version)
    }
}

fn is_all_upper(input: &[u8]) -> bool {
    input.iter().all(|b| b.is_ascii_uppercase())
}
