//! `HessianDecoder` — tag-dispatched Hessian 2.0 value decoder.

use super::constants::{
    BC_FALSE, BC_INT, BC_INT_BYTE_ZERO, BC_INT_ONE_MAX, BC_INT_ONE_MIN, BC_INT_SHORT_ZERO,
    BC_INT_THREE_MAX, BC_INT_THREE_MIN, BC_INT_TWO_MAX, BC_INT_TWO_MIN, BC_INT_ZERO, BC_LONG,
    BC_LONG_BYTE_ZERO, BC_LONG_INT, BC_LONG_ONE_MAX, BC_LONG_ONE_MIN, BC_LONG_SHORT_ZERO,
    BC_LONG_THREE_MAX, BC_LONG_THREE_MIN, BC_LONG_TWO_MAX, BC_LONG_TWO_MIN, BC_LONG_ZERO,
    BC_MESSAGE_END_LOWER, BC_MESSAGE_END_UPPER, BC_MESSAGE_START_LOWER, BC_MESSAGE_START_UPPER,
    BC_NULL, BC_TRUE,
};
use super::error::HessianError;
use super::reader::ByteReader;
use crate::HessianValue;

/// Hessian 2.0 decoder bound to one message buffer.
///
/// One decode session: validate the header with [`start_message`], pull
/// body values with [`read_any`], then validate the trailer with
/// [`complete_message`]. The decoder owns the read cursor, so every call
/// resumes where the previous one stopped.
///
/// [`start_message`]: HessianDecoder::start_message
/// [`read_any`]: HessianDecoder::read_any
/// [`complete_message`]: HessianDecoder::complete_message
pub struct HessianDecoder<'a> {
    pub reader: ByteReader<'a>,
    /// When set, [`start_message`](HessianDecoder::start_message) rejects
    /// headers whose major version byte differs. `None` accepts any
    /// version; negotiation is the caller's policy, not the decoder's.
    pub expected_major: Option<u8>,
}

impl<'a> HessianDecoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(input),
            expected_major: None,
        }
    }

    /// Decode one value: read the tag byte, then exactly the extra bytes
    /// its family calls for.
    ///
    /// Bias subtraction happens in the widened signed type, so the tag
    /// contributes the most-significant bits of the residue and the extra
    /// bytes fill in below, most significant first.
    pub fn read_any(&mut self) -> Result<HessianValue, HessianError> {
        let tag = self.reader.u8()?;
        match tag {
            BC_NULL => Ok(HessianValue::Null),
            BC_TRUE => Ok(HessianValue::Bool(true)),
            BC_FALSE => Ok(HessianValue::Bool(false)),

            // one-octet compact int: whole value in the tag
            BC_INT_ONE_MIN..=BC_INT_ONE_MAX => {
                Ok(HessianValue::Int32(tag as i32 - BC_INT_ZERO as i32))
            }

            // two-octet compact int
            BC_INT_TWO_MIN..=BC_INT_TWO_MAX => {
                let lower = self.reader.u8()? as i32;
                Ok(HessianValue::Int32(
                    ((tag as i32 - BC_INT_BYTE_ZERO as i32) << 8) | lower,
                ))
            }

            // three-octet compact int
            BC_INT_THREE_MIN..=BC_INT_THREE_MAX => {
                let middle = self.reader.u8()? as i32;
                let lower = self.reader.u8()? as i32;
                Ok(HessianValue::Int32(
                    ((tag as i32 - BC_INT_SHORT_ZERO as i32) << 16) | (middle << 8) | lower,
                ))
            }

            // 'I': full 32-bit int
            BC_INT => Ok(HessianValue::Int32(self.i32_be()?)),

            // one-octet compact long
            BC_LONG_ONE_MIN..=BC_LONG_ONE_MAX => {
                Ok(HessianValue::Int64(tag as i64 - BC_LONG_ZERO as i64))
            }

            // two-octet compact long
            BC_LONG_TWO_MIN..=BC_LONG_TWO_MAX => {
                let lower = self.reader.u8()? as i64;
                Ok(HessianValue::Int64(
                    ((tag as i64 - BC_LONG_BYTE_ZERO as i64) << 8) | lower,
                ))
            }

            // three-octet compact long
            BC_LONG_THREE_MIN..=BC_LONG_THREE_MAX => {
                let middle = self.reader.u8()? as i64;
                let lower = self.reader.u8()? as i64;
                Ok(HessianValue::Int64(
                    ((tag as i64 - BC_LONG_SHORT_ZERO as i64) << 16) | (middle << 8) | lower,
                ))
            }

            // 'Y': long carried as a full 32-bit int, sign-extended
            BC_LONG_INT => Ok(HessianValue::Int64(self.i32_be()? as i64)),

            // 'L': full 64-bit long, no decoder yet
            BC_LONG => Err(HessianError::Unimplemented(tag)),

            _ => Ok(self.unrecognized(tag)),
        }
    }

    /// Validate and consume the message header: tag byte, then major and
    /// minor version bytes. Returns the packed version, major byte high.
    ///
    /// All three bytes are consumed before the tag check, matching the
    /// wire layout.
    pub fn start_message(&mut self) -> Result<u16, HessianError> {
        let tag = self.reader.u8()?;
        let major = self.reader.u8()?;
        let minor = self.reader.u8()?;
        if tag != BC_MESSAGE_START_LOWER && tag != BC_MESSAGE_START_UPPER {
            return Err(HessianError::ExpectedMessageStart(tag));
        }
        let version = ((major as u16) << 8) | minor as u16;
        if let Some(expected) = self.expected_major {
            if major != expected {
                return Err(HessianError::UnsupportedVersion(version));
            }
        }
        Ok(version)
    }

    /// Validate and consume the end-of-message tag. No other effect.
    pub fn complete_message(&mut self) -> Result<(), HessianError> {
        let tag = self.reader.u8()?;
        if tag != BC_MESSAGE_END_UPPER && tag != BC_MESSAGE_END_LOWER {
            return Err(HessianError::ExpectedMessageEnd(tag));
        }
        Ok(())
    }

    /// Four payload bytes, most significant first.
    fn i32_be(&mut self) -> Result<i32, HessianError> {
        let bytes = [
            self.reader.u8()?,
            self.reader.u8()?,
            self.reader.u8()?,
            self.reader.u8()?,
        ];
        Ok(i32::from_be_bytes(bytes))
    }

    /// Fallback for tag bytes no implemented family claims: an empty map,
    /// never an error. String, binary, list, and object-graph tags all land
    /// here until their decoders exist.
    fn unrecognized(&self, _tag: u8) -> HessianValue {
        HessianValue::Map(Vec::new())
    }
}

/// Major version byte of a packed protocol version.
pub fn version_major(version: u16) -> u8 {
    (version >> 8) as u8
}

/// Minor version byte of a packed protocol version.
pub fn version_minor(version: u16) -> u8 {
    (version & 0xff) as u8
}
