//! Paint wear bit reinterpretation
//!
//! `paintwear` travels as the raw IEEE-754 bit pattern of the f32 carried
//! in a varint. This is a pure reinterpretation of the 4-byte image, never
//! a numeric conversion: NaNs and denormals survive exactly.

/// Reinterpret a wear value as its 32-bit wire representation.
pub fn to_bits(wear: f32) -> u32 {
    wear.to_bits()
}

/// Reinterpret a 32-bit wire value back into a wear float.
pub fn from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}
