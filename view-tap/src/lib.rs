use std::{
    borrow::Cow,
    ops::{Index, RangeBounds},
    str,
};

use bytes::Bytes;

/// Immutable view over a contiguous byte buffer. Sub-slicing shares the
/// backing buffer and never copies.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteView(Bytes);

impl ByteView {
    pub fn new() -> Self {
        ByteView(Bytes::new())
    }

    pub const fn from_static(value: &'static [u8]) -> Self {
        ByteView(Bytes::from_static(value))
    }

    pub fn copy_from_slice(value: &[u8]) -> Self {
        ByteView(Bytes::copy_from_slice(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn slice(&self, range: impl RangeBounds<usize>) -> ByteView {
        ByteView(self.0.slice(range))
    }

    pub fn as_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(&self.0)
    }

    // Decode on demand, invalid utf8 is replaced.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn into_inner(self) -> Bytes {
        self.0
    }
}

impl Index<usize> for ByteView {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for ByteView {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<Bytes> for ByteView {
    fn from(value: Bytes) -> Self {
        ByteView(value)
    }
}

impl From<&str> for ByteView {
    fn from(value: &str) -> Self {
        ByteView(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for ByteView {
    fn from(value: String) -> Self {
        ByteView(Bytes::from(value))
    }
}

impl PartialEq<[u8]> for ByteView {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_ref() == other
    }
}

impl PartialEq<&str> for ByteView {
    fn eq(&self, other: &&str) -> bool {
        self.as_ref() == other.as_bytes()
    }
}
