pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const EXPECT: &str = "Expect";
pub const HOST: &str = "Host";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const UPGRADE: &str = "Upgrade";

pub const CHUNKED: &str = "chunked";
pub const EXPECT_100_CONTINUE: &str = "100-continue";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const UPGRADE_WEBSOCKET: &str = "websocket";
