use bytes::Bytes;
use view_tap::ByteView;

use crate::abnf::{COLON, CRLF};

use super::{HeaderMap, header::Header};

/* Steps:
 *      1. Repair the block to valid utf8 up front (lossy), every split
 *         below then lands on a char boundary.
 *      2. Walk CRLF-terminated lines, stop at the empty terminator line.
 *      3. Split each line at the first ':' and trim the value. Key and
 *         value are zero-copy views of the (repaired) block.
 *      4. A line without ':' keeps the whole line as key, empty value.
 */
impl From<ByteView> for HeaderMap {
    fn from(input: ByteView) -> Self {
        let input = match input.as_str() {
            Ok(_) => input,
            Err(_) => ByteView::from(input.to_text().into_owned()),
        };
        // repaired above
        let text = input.as_str().unwrap();
        let mut headers = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            let end = text[pos..].find(CRLF).map_or(text.len(), |i| pos + i);
            if end == pos {
                break;
            }
            let line = &text[pos..end];
            let header = match line.find(COLON) {
                Some(fs_index) => {
                    let key = input.slice(pos..pos + fs_index);
                    let raw = &line[fs_index + 1..];
                    let lead = raw.len() - raw.trim_start().len();
                    let trail = raw.len() - raw.trim_end().len();
                    let start = pos + fs_index + 1 + lead;
                    let value = if start < end - trail {
                        input.slice(start..end - trail)
                    } else {
                        ByteView::new()
                    };
                    Header::new(key, value)
                }
                None => Header::new(input.slice(pos..end), ByteView::new()),
            };
            headers.push(header);
            pos = end + 2;
        }
        HeaderMap::new(headers)
    }
}

impl From<Bytes> for HeaderMap {
    fn from(input: Bytes) -> Self {
        HeaderMap::from(ByteView::from(input))
    }
}
