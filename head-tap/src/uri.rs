use std::fmt;

use thiserror::Error;
use view_tap::ByteView;

use crate::scheme::uri_scheme;

/*
 * abc://example.com:123/path/data?key=value
 * |-|   |--------------||------------------|
 *  |            |                |
 * scheme    authority      path + query
 */

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidUri {
    #[error("not valid utf8")]
    Utf8,
    #[error("missing scheme")]
    MissingScheme,
    #[error("missing authority")]
    MissingAuthority,
}

// Absolute-form uri. Components are zero-copy views of the parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    scheme: ByteView,
    authority: ByteView,
    path_and_query: ByteView,
}

/* Steps:
 *      1. Utf8 check, the component views are read back as str.
 *      2. Scheme via uri_scheme(). Absent => MissingScheme.
 *      3. Authority runs upto the first '/', '?' or '#'. Empty =>
 *         MissingAuthority. Kept verbatim, no default-port elision.
 *      4. Remainder is path + query, empty => "/".
 */
impl Uri {
    pub fn parse(target: &ByteView) -> Result<Uri, InvalidUri> {
        if target.as_str().is_err() {
            return Err(InvalidUri::Utf8);
        }
        let scheme = uri_scheme(target).ok_or(InvalidUri::MissingScheme)?;
        let rest_start = scheme.len() + 3;
        let bytes = target.as_ref();
        let authority_end = bytes[rest_start..]
            .iter()
            .position(|&b| b == b'/' || b == b'?' || b == b'#')
            .map_or(bytes.len(), |i| rest_start + i);
        if authority_end == rest_start {
            return Err(InvalidUri::MissingAuthority);
        }
        let authority = target.slice(rest_start..authority_end);
        let path_and_query = if authority_end == bytes.len() {
            ByteView::from_static(b"/")
        } else {
            target.slice(authority_end..)
        };
        Ok(Uri {
            scheme,
            authority,
            path_and_query,
        })
    }

    // Utf8 checked at parse, safe to unwrap.
    pub fn scheme(&self) -> &str {
        self.scheme.as_str().unwrap()
    }

    pub fn authority(&self) -> &str {
        self.authority.as_str().unwrap()
    }

    pub fn path_and_query(&self) -> &str {
        self.path_and_query.as_str().unwrap()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}{}",
            self.scheme(),
            self.authority(),
            self.path_and_query()
        )
    }
}
