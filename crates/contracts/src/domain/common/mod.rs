//! Common decoding boundary for records fetched from the API

pub mod decode;

// Re-exports
pub use decode::{list_payload, DecodeError};
