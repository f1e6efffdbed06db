pub mod error;
pub mod message;
pub mod request;
pub mod serializer;

pub use error::MessageError;
pub use message::{BodyState, Message, MessageCore};
pub use request::Request;
