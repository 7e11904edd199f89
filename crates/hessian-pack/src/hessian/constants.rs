//! Hessian 2.0 tag bytes, family ranges, and zero-offset biases.
//!
//! The compact numeric families reserve byte ranges whose span exactly
//! covers a biased signed range; subtracting the family's `*_ZERO` bias
//! from the tag recovers the signed residue.

/// Null value ('N').
pub const BC_NULL: u8 = 0x4e;
/// Boolean true ('T').
pub const BC_TRUE: u8 = 0x54;
/// Boolean false ('F').
pub const BC_FALSE: u8 = 0x46;

/// Full 32-bit integer ('I'): four big-endian payload bytes, no bias.
pub const BC_INT: u8 = 0x49;
/// Full 64-bit long ('L'): eight big-endian payload bytes. Not decoded yet.
pub const BC_LONG: u8 = 0x4c;
/// Long stored as a full 32-bit integer ('Y').
pub const BC_LONG_INT: u8 = 0x59;

/// Bias for the one-octet compact int family.
pub const BC_INT_ZERO: u8 = 0x90;
/// Bias for the two-octet compact int family.
pub const BC_INT_BYTE_ZERO: u8 = 0xc8;
/// Bias for the three-octet compact int family.
pub const BC_INT_SHORT_ZERO: u8 = 0xd4;

/// Bias for the one-octet compact long family.
pub const BC_LONG_ZERO: u8 = 0xe0;
/// Bias for the two-octet compact long family.
pub const BC_LONG_BYTE_ZERO: u8 = 0xf8;
/// Bias for the three-octet compact long family.
pub const BC_LONG_SHORT_ZERO: u8 = 0x3c;

// Tag ranges claimed by each compact family.

/// One-octet compact int: covers -16..=47.
pub const BC_INT_ONE_MIN: u8 = 0x80;
pub const BC_INT_ONE_MAX: u8 = 0xbf;
/// Two-octet compact int: covers -2048..=2047.
pub const BC_INT_TWO_MIN: u8 = 0xc0;
pub const BC_INT_TWO_MAX: u8 = 0xcf;
/// Three-octet compact int: covers -262144..=262143.
pub const BC_INT_THREE_MIN: u8 = 0xd0;
pub const BC_INT_THREE_MAX: u8 = 0xd7;

/// One-octet compact long: covers -8..=15.
pub const BC_LONG_ONE_MIN: u8 = 0xd8;
pub const BC_LONG_ONE_MAX: u8 = 0xef;
/// Two-octet compact long: covers -2048..=2047.
pub const BC_LONG_TWO_MIN: u8 = 0xf0;
pub const BC_LONG_TWO_MAX: u8 = 0xff;
/// Three-octet compact long: covers -262144..=262143.
pub const BC_LONG_THREE_MIN: u8 = 0x38;
pub const BC_LONG_THREE_MAX: u8 = 0x3f;

/// Message start tag ('p').
pub const BC_MESSAGE_START_LOWER: u8 = 0x70;
/// Message start tag ('P').
pub const BC_MESSAGE_START_UPPER: u8 = 0x50;
/// End-of-message tag ('Z').
pub const BC_MESSAGE_END_UPPER: u8 = 0x5a;
/// End-of-message tag ('z').
pub const BC_MESSAGE_END_LOWER: u8 = 0x7a;

/// Protocol major version this decoder targets. Enforcement is opt-in; see
/// [`HessianDecoder::expected_major`](super::HessianDecoder::expected_major).
pub const HESSIAN_PROTOCOL_MAJOR: u8 = 0x02;
