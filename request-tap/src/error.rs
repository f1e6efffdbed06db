use head_tap::{request_line::RequestLineError, uri::InvalidUri};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("request line| {0}")]
    RequestLine(#[from] RequestLineError),
    #[error("invalid uri| {text}: {source}")]
    InvalidUri {
        text: String,
        #[source]
        source: InvalidUri,
    },
    #[error("no body present")]
    BodyNotFound,
    #[error("body not read yet")]
    BodyNotRead,
    #[error("message already forwarded")]
    Locked,
}
