pub const COLON: char = ':';
pub const COMMA: char = ',';
pub const CRLF: &str = "\r\n";
pub const FORWARD_SLASH: char = '/';
pub const HEADER_FS: &str = ": ";
pub const SP: char = ' ';
