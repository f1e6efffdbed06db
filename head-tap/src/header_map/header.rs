use view_tap::ByteView;

// Single header line. Views alias the parsed block until mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    key: ByteView,
    value: ByteView,
}

impl Header {
    pub fn new(key: ByteView, value: ByteView) -> Self {
        Header { key, value }
    }

    // Blocks are repaired to valid utf8 before splitting and mutation
    // goes through &str, safe to unwrap.
    pub fn key_as_str(&self) -> &str {
        self.key.as_str().unwrap()
    }

    pub fn value_as_str(&self) -> &str {
        self.value.as_str().unwrap()
    }

    pub fn change_key(&mut self, key: &str) {
        self.key = ByteView::from(key);
    }

    pub fn change_value(&mut self, value: &str) {
        self.value = ByteView::from(value);
    }

    // Rendered length, ": " and CRLF included.
    pub fn len(&self) -> usize {
        self.key.len() + self.value.len() + 4
    }
}

// (Content-Type, application/json)
impl From<(&str, &str)> for Header {
    fn from((key, value): (&str, &str)) -> Self {
        Header::new(ByteView::from(key), ByteView::from(value))
    }
}
