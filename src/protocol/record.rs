//! Item preview data model

/// An item being previewed
///
/// Every field except `rarity` is optional; an unset field is omitted from
/// the wire entirely, which is distinct from encoding a zero. Records pass
/// through the codec by reference and are never retained.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPreviewRecord {
    /// Owner account id
    pub account_id: Option<u32>,
    /// Economy item id (64-bit)
    pub item_id: Option<u64>,
    /// Item definition index
    pub def_index: Option<u32>,
    /// Paint kit index
    pub paint_index: Option<u32>,
    /// Rarity; always emitted. Negative values let the client pick the
    /// rarity itself.
    pub rarity: i32,
    /// Quality. Absence (not value) controls whether the client shows a
    /// StatTrak label, so the codec never defaults it.
    pub quality: Option<u32>,
    /// Paint wear; carried on the wire as the raw f32 bit pattern
    pub paint_wear: Option<f32>,
    /// Paint seed
    pub paint_seed: Option<u32>,
    /// Kill-eater score type
    pub kill_eater_score_type: Option<u32>,
    /// Kill-eater counter value
    pub kill_eater_value: Option<u32>,
    /// Custom name tag text
    pub custom_name: Option<String>,
    /// Inventory position
    pub inventory: Option<u32>,
    /// Acquisition origin
    pub origin: Option<u32>,
    /// Quest id
    pub quest_id: Option<u32>,
    /// Drop reason
    pub drop_reason: Option<u32>,
    /// Music kit index
    pub music_index: Option<u32>,
    /// Entity index (signed)
    pub ent_index: Option<i32>,
    /// Pet index
    pub pet_index: Option<u32>,
    /// Applied stickers; insertion order is wire order
    pub stickers: Vec<Attachment>,
    /// Attached keychains; same wire shape as stickers
    pub keychains: Vec<Attachment>,
}

impl ItemPreviewRecord {
    /// Create an empty record with the given rarity
    #[must_use]
    pub fn new(rarity: i32) -> Self {
        Self {
            rarity,
            ..Self::default()
        }
    }
}

/// A decal-like sub-item (sticker or keychain)
///
/// All fields are optional. The float fields travel as native fixed32
/// floats, not bit-reinterpreted integers.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// Slot the attachment occupies
    pub slot: Option<u32>,
    /// Attachment definition id
    pub attachment_id: Option<u32>,
    /// Wear amount
    pub wear: Option<f32>,
    /// Scale factor
    pub scale: Option<f32>,
    /// Rotation in degrees
    pub rotation: Option<f32>,
    /// Tint id
    pub tint_id: Option<u32>,
    /// X offset from the slot anchor
    pub offset_x: Option<f32>,
    /// Y offset from the slot anchor
    pub offset_y: Option<f32>,
    /// Z offset from the slot anchor
    pub offset_z: Option<f32>,
    /// Pattern variation
    pub pattern: Option<u32>,
}
