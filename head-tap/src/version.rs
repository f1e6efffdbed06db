use std::fmt;

pub const HTTP_1_0: &str = "HTTP/1.0";
pub const HTTP_1_1: &str = "HTTP/1.1";

// Wire versions this layer models. Anything unrecognized on the request
// line falls back to 1.1.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Version {
    H10,
    #[default]
    H11,
}

impl Version {
    pub fn as_str(&self) -> &str {
        match self {
            Version::H10 => HTTP_1_0,
            Version::H11 => HTTP_1_1,
        }
    }

    // Trailing token of a request line, case-insensitive. Only HTTP/1.0
    // is significant.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case(HTTP_1_0) {
            Version::H10
        } else {
            Version::H11
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_token_one_zero() {
        assert_eq!(Version::from_token("HTTP/1.0"), Version::H10);
        assert_eq!(Version::from_token("http/1.0"), Version::H10);
    }

    #[test]
    fn test_version_from_token_fallback() {
        assert_eq!(Version::from_token("HTTP/1.1"), Version::H11);
        assert_eq!(Version::from_token("HTTP/2"), Version::H11);
        assert_eq!(Version::from_token("garbage"), Version::H11);
        assert_eq!(Version::from_token(""), Version::H11);
    }

    #[test]
    fn test_version_as_str() {
        assert_eq!(Version::H10.as_str(), "HTTP/1.0");
        assert_eq!(Version::H11.to_string(), "HTTP/1.1");
    }
}
