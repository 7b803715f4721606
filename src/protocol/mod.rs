//! Item preview wire format core
//!
//! This module provides the field layout tables, the framed message
//! writer/reader pair, and the checksum seal for inspect-link payloads.

mod checksum;
mod codec;
mod error;
mod fields;
mod reader;
mod record;
mod wear;
mod writer;

pub use codec::{deserialize, serialize};
pub use error::{DecodeError, EncodeError};
pub use record::{Attachment, ItemPreviewRecord};

/// Lead byte prepended before the framed message, covered by the CRC
pub const LEAD_BYTE: u8 = 0x00;

/// Checksum trailer size in bytes
pub const TRAILER_SIZE: usize = 4;

/// Minimum encoded size (lead byte + trailer)
pub const MIN_ENCODED_SIZE: usize = 1 + TRAILER_SIZE;
