//! Canonical byte encodings for scalar values.
//!
//! Integers are big-endian at their own width (two's complement when signed),
//! floats are their big-endian IEEE-754 bit pattern, strings are raw UTF-8.

use crate::value::{Float, Int, Uint};

/// Encodes a boolean as a single byte.
pub fn encode_bool(value: bool) -> Vec<u8> {
    vec![u8::from(value)]
}

/// Encodes a signed integer at its width.
pub fn encode_int(value: Int) -> Vec<u8> {
    match value {
        Int::I8(v) => v.to_be_bytes().to_vec(),
        Int::I16(v) => v.to_be_bytes().to_vec(),
        Int::I32(v) => v.to_be_bytes().to_vec(),
        Int::I64(v) => v.to_be_bytes().to_vec(),
        Int::I128(v) => v.to_be_bytes().to_vec(),
    }
}

/// Encodes an unsigned integer at its width.
pub fn encode_uint(value: Uint) -> Vec<u8> {
    match value {
        Uint::U8(v) => v.to_be_bytes().to_vec(),
        Uint::U16(v) => v.to_be_bytes().to_vec(),
        Uint::U32(v) => v.to_be_bytes().to_vec(),
        Uint::U64(v) => v.to_be_bytes().to_vec(),
        Uint::U128(v) => v.to_be_bytes().to_vec(),
    }
}

/// Encodes a float as its bit pattern. NaN payloads are kept as-is.
pub fn encode_float(value: Float) -> Vec<u8> {
    match value {
        Float::F32(v) => v.to_bits().to_be_bytes().to_vec(),
        Float::F64(v) => v.to_bits().to_be_bytes().to_vec(),
    }
}

/// Encodes a string as its UTF-8 bytes, without a length prefix.
pub fn encode_str(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}
