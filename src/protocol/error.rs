//! Codec error types

use thiserror::Error;

/// Errors produced while encoding a record
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    /// A scalar value does not fit the bit width of its wire kind
    #[error("field `{field}` out of range: {value} exceeds {max}")]
    ValueOutOfRange {
        /// Field name from the layout table
        field: &'static str,
        /// Offending value, widened to 64 bits
        value: u64,
        /// Largest value the declared kind can carry
        max: u64,
    },
}

/// Errors produced while decoding an inspect-link payload
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// Hex input has an odd number of characters
    #[error("odd-length hex input: {len} characters")]
    OddHexLength {
        /// Input length in characters
        len: usize,
    },

    /// Hex input contains a non-hex character
    #[error("invalid hex byte {byte:#04x} at offset {index}")]
    InvalidHexByte {
        /// Offending byte
        byte: u8,
        /// Offset into the input string
        index: usize,
    },

    /// Decoded buffer is shorter than lead byte + trailer
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Buffer ended in the middle of a varint
    #[error("varint truncated at end of buffer")]
    UnterminatedVarint,

    /// A varint ran past its 10-byte maximum width
    #[error("varint exceeds maximum width")]
    VarintTooLong,

    /// A fixed-width value ran past the end of the buffer
    #[error("truncated value: need {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the value requires
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// A length-delimited field declared more bytes than remain
    #[error("length-delimited field overruns buffer: declared {declared}, {remaining} remaining")]
    LengthOverrun {
        /// Declared payload length
        declared: u64,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// A tag carried a wire type with no recognized encoding
    #[error("field {number} has unsupported wire type {wire}")]
    InvalidWireType {
        /// Field number from the tag
        number: u32,
        /// Wire type bits from the tag
        wire: u8,
    },

    /// Custom name bytes are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
