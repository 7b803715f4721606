//! Inspect-link codec (serialize/deserialize)
//!
//! The only public surface of the crate: record in, uppercase hex string
//! out, and back. Callers are responsible for stripping any link scheme or
//! console-command prefix before handing over the hex payload.

use tracing::trace;

use super::error::{DecodeError, EncodeError};
use super::record::ItemPreviewRecord;
use super::{checksum, reader, writer};

/// Serialize a record into an inspect-link hex payload
///
/// # Format
///
/// ```text
/// [LEAD 0x00] [FRAMED MESSAGE (variable)] [CHECKSUM (4 bytes, big-endian)]
/// ```
///
/// rendered as uppercase hex, two characters per byte, no separators.
pub fn serialize(record: &ItemPreviewRecord) -> Result<String, EncodeError> {
    let message = writer::write_record(record)?;
    let sealed = checksum::seal(&message);

    trace!(bytes = sealed.len(), "encoded item preview");

    Ok(encode_hex(&sealed))
}

/// Deserialize an inspect-link hex payload back into a record
///
/// Accepts upper- or lowercase hex. The checksum trailer is stripped
/// without verification.
///
/// # Errors
///
/// Returns an error for odd-length or non-hex input, a buffer shorter than
/// lead byte + trailer, or any malformed field encoding. Unknown field
/// numbers are skipped, not errors.
pub fn deserialize(input: &str) -> Result<ItemPreviewRecord, DecodeError> {
    let raw = decode_hex(input)?;
    let message = checksum::strip(&raw)?;
    let record = reader::read_record(message)?;

    trace!(bytes = raw.len(), "decoded item preview");

    Ok(record)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
        out.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
    }
    out
}

fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = input.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddHexLength { len: bytes.len() });
    }

    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (index, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = hex_value(pair[0]).ok_or(DecodeError::InvalidHexByte {
            byte: pair[0],
            index: index * 2,
        })?;
        let lo = hex_value(pair[1]).ok_or(DecodeError::InvalidHexByte {
            byte: pair[1],
            index: index * 2 + 1,
        })?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
