//! Framed message writer
//!
//! Walks the layout tables in declared order and emits tag + value for
//! every present field. Absent fields produce no bytes at all. Attachment
//! sequences become one length-delimited frame per element, encoded
//! recursively with the attachment table.

use bytes::BufMut;

use super::error::EncodeError;
use super::fields::{
    ATTACHMENT_FIELDS, AttachmentField, FieldDescriptor, ITEM_FIELDS, ItemField, WireType,
};
use super::record::{Attachment, ItemPreviewRecord};
use super::wear;

/// Encode a record as framed message bytes (no lead byte, no trailer)
pub fn write_record(record: &ItemPreviewRecord) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(96);

    for desc in &ITEM_FIELDS {
        match desc.field {
            ItemField::AccountId => put_opt_u32(&mut buf, desc, record.account_id)?,
            ItemField::ItemId => {
                if let Some(id) = record.item_id {
                    put_scalar(&mut buf, desc, id)?;
                }
            }
            ItemField::DefIndex => put_opt_u32(&mut buf, desc, record.def_index)?,
            ItemField::PaintIndex => put_opt_u32(&mut buf, desc, record.paint_index)?,
            // Rarity is the one field that is always emitted, even when zero
            ItemField::Rarity => put_scalar(&mut buf, desc, u64::from(record.rarity as u32))?,
            ItemField::Quality => put_opt_u32(&mut buf, desc, record.quality)?,
            ItemField::PaintWear => {
                if let Some(value) = record.paint_wear {
                    put_scalar(&mut buf, desc, u64::from(wear::to_bits(value)))?;
                }
            }
            ItemField::PaintSeed => put_opt_u32(&mut buf, desc, record.paint_seed)?,
            ItemField::KillEaterScoreType => {
                put_opt_u32(&mut buf, desc, record.kill_eater_score_type)?;
            }
            ItemField::KillEaterValue => put_opt_u32(&mut buf, desc, record.kill_eater_value)?,
            ItemField::CustomName => {
                if let Some(name) = &record.custom_name {
                    put_text(&mut buf, desc.number, name);
                }
            }
            ItemField::Inventory => put_opt_u32(&mut buf, desc, record.inventory)?,
            ItemField::Origin => put_opt_u32(&mut buf, desc, record.origin)?,
            ItemField::QuestId => put_opt_u32(&mut buf, desc, record.quest_id)?,
            ItemField::DropReason => put_opt_u32(&mut buf, desc, record.drop_reason)?,
            ItemField::MusicIndex => put_opt_u32(&mut buf, desc, record.music_index)?,
            ItemField::EntIndex => {
                if let Some(value) = record.ent_index {
                    put_scalar(&mut buf, desc, u64::from(value as u32))?;
                }
            }
            ItemField::PetIndex => put_opt_u32(&mut buf, desc, record.pet_index)?,
            ItemField::Stickers => put_attachments(&mut buf, desc.number, &record.stickers)?,
            ItemField::Keychains => put_attachments(&mut buf, desc.number, &record.keychains)?,
        }
    }

    Ok(buf)
}

fn write_attachment(attachment: &Attachment) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(32);

    for desc in &ATTACHMENT_FIELDS {
        match desc.field {
            AttachmentField::Slot => put_opt_u32(&mut buf, desc, attachment.slot)?,
            AttachmentField::AttachmentId => put_opt_u32(&mut buf, desc, attachment.attachment_id)?,
            AttachmentField::Wear => put_opt_f32(&mut buf, desc.number, attachment.wear),
            AttachmentField::Scale => put_opt_f32(&mut buf, desc.number, attachment.scale),
            AttachmentField::Rotation => put_opt_f32(&mut buf, desc.number, attachment.rotation),
            AttachmentField::TintId => put_opt_u32(&mut buf, desc, attachment.tint_id)?,
            AttachmentField::OffsetX => put_opt_f32(&mut buf, desc.number, attachment.offset_x),
            AttachmentField::OffsetY => put_opt_f32(&mut buf, desc.number, attachment.offset_y),
            AttachmentField::OffsetZ => put_opt_f32(&mut buf, desc.number, attachment.offset_z),
            AttachmentField::Pattern => put_opt_u32(&mut buf, desc, attachment.pattern)?,
        }
    }

    Ok(buf)
}

fn put_attachments(
    buf: &mut Vec<u8>,
    number: u32,
    attachments: &[Attachment],
) -> Result<(), EncodeError> {
    // An empty sequence emits nothing; absent and empty are wire-identical
    for attachment in attachments {
        let body = write_attachment(attachment)?;
        put_tag(buf, number, WireType::LengthDelimited);
        put_varint(buf, body.len() as u64);
        buf.put_slice(&body);
    }
    Ok(())
}

fn put_opt_u32<F: Copy>(
    buf: &mut Vec<u8>,
    desc: &FieldDescriptor<F>,
    value: Option<u32>,
) -> Result<(), EncodeError> {
    if let Some(value) = value {
        put_scalar(buf, desc, u64::from(value))?;
    }
    Ok(())
}

/// Every varint-carried scalar funnels through here, widened to 64 bits,
/// so a value wider than its declared kind is rejected instead of silently
/// truncated.
fn put_scalar<F: Copy>(
    buf: &mut Vec<u8>,
    desc: &FieldDescriptor<F>,
    value: u64,
) -> Result<(), EncodeError> {
    let max = desc.kind.varint_max();
    if value > max {
        return Err(EncodeError::ValueOutOfRange {
            field: desc.name,
            value,
            max,
        });
    }
    put_tag(buf, desc.number, WireType::Varint);
    put_varint(buf, value);
    Ok(())
}

fn put_opt_f32(buf: &mut Vec<u8>, number: u32, value: Option<f32>) {
    if let Some(value) = value {
        put_tag(buf, number, WireType::Fixed32);
        buf.put_f32_le(value);
    }
}

fn put_text(buf: &mut Vec<u8>, number: u32, text: &str) {
    put_tag(buf, number, WireType::LengthDelimited);
    put_varint(buf, text.len() as u64);
    buf.put_slice(text.as_bytes());
}

fn put_tag(buf: &mut Vec<u8>, number: u32, wire: WireType) {
    put_varint(buf, u64::from((number << 3) | wire.as_u32()));
}

/// LSB group first, continuation bit on all but the final byte
fn put_varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}
