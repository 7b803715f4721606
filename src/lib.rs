//! Codec for the CS2/CS:GO item preview ("inspect link") wire format
//!
//! This library converts an in-memory item preview record into the hex
//! payload the game client's inspect command consumes, and back. The wire
//! format is manual protobuf-style field framing with a zero lead byte and
//! a CRC-derived 4-byte trailer; `paintwear` travels as the raw bit pattern
//! of its f32.
//!
//! # Quick Start
//!
//! ```rust
//! use econ_preview::ItemPreviewRecord;
//!
//! let record = ItemPreviewRecord {
//!     def_index: Some(60),
//!     paint_index: Some(440),
//!     paint_seed: Some(353),
//!     ..ItemPreviewRecord::new(5)
//! };
//!
//! // Encode to the inspect-command hex payload
//! let hex = econ_preview::serialize(&record)?;
//!
//! // Decode it back
//! let decoded = econ_preview::deserialize(&hex)?;
//! assert_eq!(decoded, record);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The resulting string is what follows `csgo_econ_action_preview` in a
//! console command or a `steam://rungame/730/...` inspect link. Stripping
//! those prefixes is the caller's job; this crate only handles the hex
//! payload itself.
//!
//! # Features
//!
//! - **Exact wire layout** - fixed field tables shared by writer and reader
//! - **Bit-for-bit checksum** - the client's CRC32 mixing, wrapping u32
//! - **Forward compatible** - unknown fields are skipped, never fatal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;

pub use protocol::{
    Attachment, DecodeError, EncodeError, ItemPreviewRecord, deserialize, serialize,
};
