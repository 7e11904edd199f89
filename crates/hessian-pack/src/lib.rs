//! Hessian 2.0 binary decoding.
//!
//! A tag-dispatched decoder for the Hessian 2.0 compact wire encoding. The
//! first byte of every encoded value selects the decoding rule; the compact
//! numeric families fold small values into the tag byte itself (optionally
//! followed by one or two payload bytes), while full-width forms carry a
//! fixed big-endian payload. A decode session walks one message buffer:
//! header, body values, trailer.
//!
//! ```
//! use hessian_pack::{HessianDecoder, HessianValue};
//!
//! let mut decoder = HessianDecoder::new(&[0x70, 0x02, 0x00, 0x4e, 0x5a]);
//! let version = decoder.start_message().unwrap();
//! assert_eq!(version, 0x0200);
//! assert_eq!(decoder.read_any().unwrap(), HessianValue::Null);
//! decoder.complete_message().unwrap();
//! ```

mod hessian_value;

pub mod hessian;

pub use hessian::{
    version_major, version_minor, ByteReader, HessianDecoder, HessianError,
    HESSIAN_PROTOCOL_MAJOR,
};
pub use hessian_value::HessianValue;
