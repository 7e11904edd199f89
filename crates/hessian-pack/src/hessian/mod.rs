//! Hessian 2.0 decoder family.

pub mod constants;
pub mod decoder;
pub mod error;
pub mod reader;
pub mod util;

pub use constants::HESSIAN_PROTOCOL_MAJOR;
pub use decoder::{version_major, version_minor, HessianDecoder};
pub use error::HessianError;
pub use reader::ByteReader;
