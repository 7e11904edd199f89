//! Hessian decoder error type.

use thiserror::Error;

/// Error type for Hessian 2.0 binary decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HessianError {
    /// The cursor ran past the end of the buffer. Always fatal to the
    /// decode session: the input is a closed, fully available buffer, so
    /// there are no more bytes coming.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The message header did not begin with 'p' or 'P'.
    #[error("expected message start tag, got 0x{0:02x}")]
    ExpectedMessageStart(u8),
    /// The message trailer was not 'Z' or 'z'.
    #[error("expected message end tag, got 0x{0:02x}")]
    ExpectedMessageEnd(u8),
    /// The header's major version did not match the caller-requested one.
    #[error("unsupported protocol version 0x{0:04x}")]
    UnsupportedVersion(u16),
    /// The tag belongs to a family this decoder does not handle yet.
    #[error("decoding for tag 0x{0:02x} is not implemented")]
    Unimplemented(u8),
}
