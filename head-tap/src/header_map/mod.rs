pub mod header;
use header::Header;
use tracing::error;

use crate::{
    abnf::COMMA,
    const_headers::{
        CHUNKED, CONTENT_LENGTH, CONTENT_TYPE, EXPECT, HOST, TRANSFER_ENCODING, UPGRADE,
    },
};

mod from_bytes;

// Ordered Vec<Header>, keys compared case-insensitively, wire order
// preserved across mutation.
#[cfg_attr(any(test, debug_assertions), derive(Debug, PartialEq, Eq))]
#[derive(Default)]
pub struct HeaderMap {
    headers: Vec<Header>,
}

impl HeaderMap {
    pub fn new(headers: Vec<Header>) -> Self {
        HeaderMap { headers }
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn headers_as_mut(&mut self) -> &mut Vec<Header> {
        &mut self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn header_key_position(&self, key: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.key_as_str().eq_ignore_ascii_case(key))
    }

    pub fn value_for_key(&self, key: &str) -> Option<&str> {
        for header in self.headers.iter() {
            if header.key_as_str().eq_ignore_ascii_case(key) {
                return Some(header.value_as_str());
            }
        }
        None
    }

    pub fn add_header(&mut self, header: Header) {
        self.headers.push(header);
    }

    // Replace in place keeps the original wire position, append otherwise.
    pub fn set_or_add(&mut self, key: &str, value: &str) {
        match self.header_key_position(key) {
            Some(position) => self.headers[position].change_value(value),
            None => self.headers.push(Header::from((key, value))),
        }
    }

    pub fn remove_header_on_key(&mut self, key: &str) -> bool {
        match self.header_key_position(key) {
            Some(position) => {
                self.headers.remove(position);
                true
            }
            None => false,
        }
    }

    // Well-known headers
    pub fn host(&self) -> Option<&str> {
        self.value_for_key(HOST)
    }

    pub fn expect(&self) -> Option<&str> {
        self.value_for_key(EXPECT)
    }

    pub fn upgrade(&self) -> Option<&str> {
        self.value_for_key(UPGRADE)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.value_for_key(CONTENT_TYPE)
    }

    pub fn transfer_encoding(&self) -> Option<&str> {
        self.value_for_key(TRANSFER_ENCODING)
    }

    // Unparsable values count as absent.
    pub fn content_length(&self) -> Option<u64> {
        let value = self.value_for_key(CONTENT_LENGTH)?;
        match value.trim().parse() {
            Ok(length) => Some(length),
            Err(e) => {
                error!("content-length| {}: {:?}", e, value);
                None
            }
        }
    }

    pub fn is_chunked(&self) -> bool {
        self.transfer_encoding().is_some_and(|value| {
            value
                .split(COMMA)
                .any(|token| token.trim().eq_ignore_ascii_case(CHUNKED))
        })
    }
}
