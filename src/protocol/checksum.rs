//! Checksum seal for inspect-link payloads
//!
//! The client expects the framed message prefixed with a single zero lead
//! byte and followed by a 4-byte trailer derived from the CRC32 of the
//! lead byte + message. The trailer arithmetic must match the client
//! bit-for-bit:
//!
//! ```text
//! B       = [0x00] ++ M
//! crc     = CRC32_IEEE(B)
//! trailer = (crc & 0xFFFF) ^ (len(M) * crc)      (u32, wrapping)
//! ```
//!
//! The multiply wraps at 32 bits. Widening it (or letting it round through
//! a wider type) changes the trailer on large payloads.
//!
//! Decode never recomputes the trailer; it is sliced off unverified.

use super::error::DecodeError;
use super::{LEAD_BYTE, MIN_ENCODED_SIZE, TRAILER_SIZE};

/// Prepend the lead byte and append the checksum trailer
pub fn seal(message: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + message.len() + TRAILER_SIZE);
    buf.push(LEAD_BYTE);
    buf.extend_from_slice(message);

    let crc = crc32fast::hash(&buf);
    let mixed = (crc & 0xFFFF) ^ (message.len() as u32).wrapping_mul(crc);

    buf.extend_from_slice(&mixed.to_be_bytes());
    buf
}

/// Strip the lead byte and trailer, returning the framed message bytes.
///
/// The trailer is not verified; a tampered checksum still decodes.
pub fn strip(buf: &[u8]) -> Result<&[u8], DecodeError> {
    if buf.len() < MIN_ENCODED_SIZE {
        return Err(DecodeError::BufferTooSmall {
            needed: MIN_ENCODED_SIZE,
            got: buf.len(),
        });
    }
    Ok(&buf[1..buf.len() - TRAILER_SIZE])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_layout() {
        let sealed = seal(&[0x28, 0x05]);
        assert_eq!(sealed.len(), 1 + 2 + TRAILER_SIZE);
        assert_eq!(sealed[0], LEAD_BYTE);
        assert_eq!(&sealed[1..3], &[0x28, 0x05]);
    }

    #[test]
    fn test_trailer_arithmetic() {
        let message = [0x28, 0x05];
        let sealed = seal(&message);

        let crc = crc32fast::hash(&sealed[..3]);
        let expected = (crc & 0xFFFF) ^ 2u32.wrapping_mul(crc);
        assert_eq!(&sealed[3..], &expected.to_be_bytes());
    }

    #[test]
    fn test_known_vector_trailer() {
        // Message bytes of the reference inspect string; trailer 420FC456
        let message = [
            0x18, 0x07, 0x20, 0x2C, 0x28, 0xF6, 0xFF, 0xFF, 0xFF, 0x0F, 0x30, 0x09, 0x38, 0x8E,
            0xC4, 0x91, 0xDF, 0x03, 0x40, 0x95, 0x05, 0x48, 0x00, 0x50, 0xA4, 0x03, 0x70, 0x08,
        ];
        let sealed = seal(&message);
        assert_eq!(&sealed[sealed.len() - 4..], &[0x42, 0x0F, 0xC4, 0x56]);
    }

    #[test]
    fn test_strip_round_trip() {
        let sealed = seal(&[0x28, 0x05]);
        assert_eq!(strip(&sealed).unwrap(), &[0x28, 0x05]);
    }

    #[test]
    fn test_strip_empty_message() {
        let sealed = seal(&[]);
        assert_eq!(sealed.len(), MIN_ENCODED_SIZE);
        assert_eq!(strip(&sealed).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_strip_rejects_short_buffer() {
        assert!(matches!(
            strip(&[0x00, 0x01, 0x02, 0x03]),
            Err(DecodeError::BufferTooSmall { needed: 5, got: 4 })
        ));
    }

    #[test]
    fn test_strip_ignores_bad_trailer() {
        let mut sealed = seal(&[0x28, 0x05]);
        let len = sealed.len();
        sealed[len - 1] ^= 0xFF;
        assert_eq!(strip(&sealed).unwrap(), &[0x28, 0x05]);
    }
}
