use view_tap::ByteView;

pub const HTTP: &str = "http";
pub const HTTPS: &str = "https";

const COLON: u8 = b':';
const SLASH: u8 = b'/';

/* Matches ^[A-Za-z]+:// without a pattern engine.
 *
 * Steps:
 *      1. Views shorter than 3 bytes never match.
 *      2. Scan byte-by-byte until ':'. Every scanned byte must be an
 *         ASCII letter.
 *      3. Require ':' then exactly "//".
 *
 * The returned view excludes the "://" and aliases the input buffer, so
 * a match never copies. An empty scheme ("://x") is no match.
 */
pub fn uri_scheme(view: &ByteView) -> Option<ByteView> {
    if view.len() < 3 {
        return None;
    }
    let bytes = view.as_ref();
    let mut i = 0;
    while i < bytes.len() - 3 {
        let ch = bytes[i];
        if ch == COLON {
            break;
        }
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        i += 1;
    }
    if i == 0 || bytes[i] != COLON {
        return None;
    }
    if bytes[i + 1] != SLASH || bytes[i + 2] != SLASH {
        return None;
    }
    Some(view.slice(..i))
}

/// ASCII case-insensitive https check on a detected scheme.
pub fn is_https_scheme(scheme: &ByteView) -> bool {
    scheme.as_ref().eq_ignore_ascii_case(HTTPS.as_bytes())
}
