//! Convenience Hessian helpers.

use super::constants::{BC_MESSAGE_END_LOWER, BC_MESSAGE_END_UPPER};
use super::decoder::HessianDecoder;
use super::error::HessianError;
use crate::HessianValue;

/// Decode a single value from `blob`.
pub fn decode(blob: &[u8]) -> Result<HessianValue, HessianError> {
    let mut decoder = HessianDecoder::new(blob);
    decoder.read_any()
}

/// Decode a whole message envelope: header, body values, trailer.
///
/// Returns the packed protocol version and the body values. The body walk
/// stops when the next byte is the end-of-message tag, which no decodable
/// value family claims.
pub fn decode_message(blob: &[u8]) -> Result<(u16, Vec<HessianValue>), HessianError> {
    let mut decoder = HessianDecoder::new(blob);
    let version = decoder.start_message()?;
    let mut values = Vec::new();
    loop {
        let tag = decoder.reader.peek()?;
        if tag == BC_MESSAGE_END_UPPER || tag == BC_MESSAGE_END_LOWER {
            break;
        }
        values.push(decoder.read_any()?);
    }
    decoder.complete_message()?;
    Ok((version, values))
}
