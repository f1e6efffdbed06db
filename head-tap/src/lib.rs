#![allow(clippy::len_without_is_empty)]
pub mod abnf;
pub mod const_headers;
pub mod header_map;
pub mod methods;
pub mod request_line;
pub mod scheme;
pub mod uri;
pub mod version;
