//! Field layout tables
//!
//! The tables below are the single source of truth for the wire layout:
//! both the writer and the reader iterate or look up the same descriptors,
//! so field numbers, kinds, and emission order cannot drift apart.
//!
//! Declared order for the record table matches the consuming client: scalar
//! fields 1-11 and 13-19 first, then the repeated sub-message fields 12
//! (stickers) and 20 (keychains) after all scalars.

/// Protobuf wire types used by the preview format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Variable-length integer
    Varint = 0,
    /// 8 raw bytes (skip-only; no declared field uses it)
    Fixed64 = 1,
    /// Varint length prefix followed by that many bytes
    LengthDelimited = 2,
    /// 4 raw bytes, little-endian
    Fixed32 = 5,
}

impl WireType {
    /// Extract the wire type from a tag, if it names a recognized encoding.
    ///
    /// Wire types 3 and 4 (groups) and 6/7 (reserved) are malformed here.
    pub fn from_tag(tag: u64) -> Option<Self> {
        match tag & 0x7 {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::LengthDelimited),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }

    /// Low three tag bits for this wire type
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

/// How a field's value is represented on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Unsigned 32-bit varint
    Uint32,
    /// Unsigned 64-bit varint
    Uint64,
    /// Two's-complement 32-bit value carried in a varint
    Int32,
    /// IEEE-754 bit pattern of an f32 carried in a varint
    WearBits,
    /// f32 as 4 little-endian bytes
    Float,
    /// Varint length followed by UTF-8 bytes
    Text,
    /// Repeated length-delimited attachment sub-message
    Attachments,
}

impl ScalarKind {
    /// Wire type this kind is framed with
    pub const fn wire_type(self) -> WireType {
        match self {
            Self::Uint32 | Self::Uint64 | Self::Int32 | Self::WearBits => WireType::Varint,
            Self::Float => WireType::Fixed32,
            Self::Text | Self::Attachments => WireType::LengthDelimited,
        }
    }

    /// Largest value a varint-carried kind can hold
    pub const fn varint_max(self) -> u64 {
        match self {
            Self::Uint64 => u64::MAX,
            _ => u32::MAX as u64,
        }
    }
}

/// Record fields, identified for writer/reader dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    AccountId,
    ItemId,
    DefIndex,
    PaintIndex,
    Rarity,
    Quality,
    PaintWear,
    PaintSeed,
    KillEaterScoreType,
    KillEaterValue,
    CustomName,
    Inventory,
    Origin,
    QuestId,
    DropReason,
    MusicIndex,
    EntIndex,
    PetIndex,
    Stickers,
    Keychains,
}

/// Attachment fields, shared by stickers and keychains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentField {
    Slot,
    AttachmentId,
    Wear,
    Scale,
    Rotation,
    TintId,
    OffsetX,
    OffsetY,
    OffsetZ,
    Pattern,
}

/// One field's place in the wire layout
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<F: Copy> {
    /// Protobuf field number
    pub number: u32,
    /// Value representation
    pub kind: ScalarKind,
    /// Which record/attachment field this descriptor maps to
    pub field: F,
    /// Field name, for error reporting
    pub name: &'static str,
}

const fn desc<F: Copy>(number: u32, kind: ScalarKind, field: F, name: &'static str) -> FieldDescriptor<F> {
    FieldDescriptor {
        number,
        kind,
        field,
        name,
    }
}

/// Top-level record layout, in wire emission order
pub const ITEM_FIELDS: [FieldDescriptor<ItemField>; 20] = [
    desc(1, ScalarKind::Uint32, ItemField::AccountId, "accountid"),
    desc(2, ScalarKind::Uint64, ItemField::ItemId, "itemid"),
    desc(3, ScalarKind::Uint32, ItemField::DefIndex, "defindex"),
    desc(4, ScalarKind::Uint32, ItemField::PaintIndex, "paintindex"),
    desc(5, ScalarKind::Int32, ItemField::Rarity, "rarity"),
    desc(6, ScalarKind::Uint32, ItemField::Quality, "quality"),
    desc(7, ScalarKind::WearBits, ItemField::PaintWear, "paintwear"),
    desc(8, ScalarKind::Uint32, ItemField::PaintSeed, "paintseed"),
    desc(9, ScalarKind::Uint32, ItemField::KillEaterScoreType, "killeaterscoretype"),
    desc(10, ScalarKind::Uint32, ItemField::KillEaterValue, "killeatervalue"),
    desc(11, ScalarKind::Text, ItemField::CustomName, "customname"),
    desc(13, ScalarKind::Uint32, ItemField::Inventory, "inventory"),
    desc(14, ScalarKind::Uint32, ItemField::Origin, "origin"),
    desc(15, ScalarKind::Uint32, ItemField::QuestId, "questid"),
    desc(16, ScalarKind::Uint32, ItemField::DropReason, "dropreason"),
    desc(17, ScalarKind::Uint32, ItemField::MusicIndex, "musicindex"),
    desc(18, ScalarKind::Int32, ItemField::EntIndex, "entindex"),
    desc(19, ScalarKind::Uint32, ItemField::PetIndex, "petindex"),
    desc(12, ScalarKind::Attachments, ItemField::Stickers, "stickers"),
    desc(20, ScalarKind::Attachments, ItemField::Keychains, "keychains"),
];

/// Attachment sub-message layout, in wire emission order
pub const ATTACHMENT_FIELDS: [FieldDescriptor<AttachmentField>; 10] = [
    desc(1, ScalarKind::Uint32, AttachmentField::Slot, "slot"),
    desc(2, ScalarKind::Uint32, AttachmentField::AttachmentId, "sticker_id"),
    desc(3, ScalarKind::Float, AttachmentField::Wear, "wear"),
    desc(4, ScalarKind::Float, AttachmentField::Scale, "scale"),
    desc(5, ScalarKind::Float, AttachmentField::Rotation, "rotation"),
    desc(6, ScalarKind::Uint32, AttachmentField::TintId, "tint_id"),
    desc(7, ScalarKind::Float, AttachmentField::OffsetX, "offset_x"),
    desc(8, ScalarKind::Float, AttachmentField::OffsetY, "offset_y"),
    desc(9, ScalarKind::Float, AttachmentField::OffsetZ, "offset_z"),
    desc(10, ScalarKind::Uint32, AttachmentField::Pattern, "pattern"),
];

/// Look up a record field by number
pub fn item_field(number: u32) -> Option<&'static FieldDescriptor<ItemField>> {
    ITEM_FIELDS.iter().find(|d| d.number == number)
}

/// Look up an attachment field by number
pub fn attachment_field(number: u32) -> Option<&'static FieldDescriptor<AttachmentField>> {
    ATTACHMENT_FIELDS.iter().find(|d| d.number == number)
}
