//! Framed message reader
//!
//! Single forward pass over the message bytes: read a tag, split it into
//! field number and wire type, then either decode per the layout table or
//! skip by wire kind. Unknown field numbers are skipped, never fatal, so
//! payloads from newer clients still decode. Malformed encodings
//! (truncated values, unterminated varints, overrunning lengths,
//! unrecognized wire types) abort with an error and never yield a partial
//! record.

use bytes::Buf;

use super::error::DecodeError;
use super::fields::{self, AttachmentField, ItemField, WireType};
use super::record::{Attachment, ItemPreviewRecord};
use super::wear;

/// Decode framed message bytes (lead byte and trailer already stripped)
pub fn read_record(mut buf: &[u8]) -> Result<ItemPreviewRecord, DecodeError> {
    let mut record = ItemPreviewRecord::default();

    while buf.has_remaining() {
        let tag = get_varint(&mut buf)?;
        let number = (tag >> 3) as u32;
        let wire = WireType::from_tag(tag).ok_or(DecodeError::InvalidWireType {
            number,
            wire: (tag & 0x7) as u8,
        })?;

        match fields::item_field(number) {
            // A known field with an unexpected wire type is skipped like an
            // unknown one rather than misparsed
            Some(desc) if desc.kind.wire_type() == wire => {
                set_item_field(&mut record, desc.field, &mut buf)?;
            }
            _ => skip_value(&mut buf, wire)?,
        }
    }

    Ok(record)
}

fn set_item_field(
    record: &mut ItemPreviewRecord,
    field: ItemField,
    buf: &mut &[u8],
) -> Result<(), DecodeError> {
    match field {
        ItemField::AccountId => record.account_id = Some(get_u32(buf)?),
        ItemField::ItemId => record.item_id = Some(get_varint(buf)?),
        ItemField::DefIndex => record.def_index = Some(get_u32(buf)?),
        ItemField::PaintIndex => record.paint_index = Some(get_u32(buf)?),
        ItemField::Rarity => record.rarity = get_u32(buf)? as i32,
        ItemField::Quality => record.quality = Some(get_u32(buf)?),
        ItemField::PaintWear => record.paint_wear = Some(wear::from_bits(get_u32(buf)?)),
        ItemField::PaintSeed => record.paint_seed = Some(get_u32(buf)?),
        ItemField::KillEaterScoreType => record.kill_eater_score_type = Some(get_u32(buf)?),
        ItemField::KillEaterValue => record.kill_eater_value = Some(get_u32(buf)?),
        ItemField::CustomName => {
            let frame = get_frame(buf)?;
            record.custom_name = Some(String::from_utf8(frame.to_vec())?);
        }
        ItemField::Inventory => record.inventory = Some(get_u32(buf)?),
        ItemField::Origin => record.origin = Some(get_u32(buf)?),
        ItemField::QuestId => record.quest_id = Some(get_u32(buf)?),
        ItemField::DropReason => record.drop_reason = Some(get_u32(buf)?),
        ItemField::MusicIndex => record.music_index = Some(get_u32(buf)?),
        ItemField::EntIndex => record.ent_index = Some(get_u32(buf)? as i32),
        ItemField::PetIndex => record.pet_index = Some(get_u32(buf)?),
        ItemField::Stickers => record.stickers.push(read_attachment(get_frame(buf)?)?),
        ItemField::Keychains => record.keychains.push(read_attachment(get_frame(buf)?)?),
    }
    Ok(())
}

fn read_attachment(mut buf: &[u8]) -> Result<Attachment, DecodeError> {
    let mut attachment = Attachment::default();

    while buf.has_remaining() {
        let tag = get_varint(&mut buf)?;
        let number = (tag >> 3) as u32;
        let wire = WireType::from_tag(tag).ok_or(DecodeError::InvalidWireType {
            number,
            wire: (tag & 0x7) as u8,
        })?;

        match fields::attachment_field(number) {
            Some(desc) if desc.kind.wire_type() == wire => {
                set_attachment_field(&mut attachment, desc.field, &mut buf)?;
            }
            _ => skip_value(&mut buf, wire)?,
        }
    }

    Ok(attachment)
}

fn set_attachment_field(
    attachment: &mut Attachment,
    field: AttachmentField,
    buf: &mut &[u8],
) -> Result<(), DecodeError> {
    match field {
        AttachmentField::Slot => attachment.slot = Some(get_u32(buf)?),
        AttachmentField::AttachmentId => attachment.attachment_id = Some(get_u32(buf)?),
        AttachmentField::Wear => attachment.wear = Some(get_f32(buf)?),
        AttachmentField::Scale => attachment.scale = Some(get_f32(buf)?),
        AttachmentField::Rotation => attachment.rotation = Some(get_f32(buf)?),
        AttachmentField::TintId => attachment.tint_id = Some(get_u32(buf)?),
        AttachmentField::OffsetX => attachment.offset_x = Some(get_f32(buf)?),
        AttachmentField::OffsetY => attachment.offset_y = Some(get_f32(buf)?),
        AttachmentField::OffsetZ => attachment.offset_z = Some(get_f32(buf)?),
        AttachmentField::Pattern => attachment.pattern = Some(get_u32(buf)?),
    }
    Ok(())
}

fn skip_value(buf: &mut &[u8], wire: WireType) -> Result<(), DecodeError> {
    match wire {
        WireType::Varint => {
            get_varint(buf)?;
        }
        WireType::Fixed64 => skip_bytes(buf, 8)?,
        WireType::Fixed32 => skip_bytes(buf, 4)?,
        WireType::LengthDelimited => {
            get_frame(buf)?;
        }
    }
    Ok(())
}

fn skip_bytes(buf: &mut &[u8], count: usize) -> Result<(), DecodeError> {
    if buf.remaining() < count {
        return Err(DecodeError::Truncated {
            needed: count,
            remaining: buf.remaining(),
        });
    }
    buf.advance(count);
    Ok(())
}

/// Decode a varint, bounded at protobuf's 10-byte maximum width
fn get_varint(buf: &mut &[u8]) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    for shift in 0..10u32 {
        if !buf.has_remaining() {
            return Err(DecodeError::UnterminatedVarint);
        }
        let byte = buf.get_u8();
        value |= u64::from(byte & 0x7F) << (shift * 7);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::VarintTooLong)
}

/// 32-bit scalars keep the low 32 bits of the varint, matching the
/// consuming client's reader
fn get_u32(buf: &mut &[u8]) -> Result<u32, DecodeError> {
    Ok(get_varint(buf)? as u32)
}

fn get_f32(buf: &mut &[u8]) -> Result<f32, DecodeError> {
    if buf.remaining() < 4 {
        return Err(DecodeError::Truncated {
            needed: 4,
            remaining: buf.remaining(),
        });
    }
    Ok(buf.get_f32_le())
}

fn get_frame<'a>(buf: &mut &'a [u8]) -> Result<&'a [u8], DecodeError> {
    let declared = get_varint(buf)?;
    let len = usize::try_from(declared).unwrap_or(usize::MAX);
    if len > buf.len() {
        return Err(DecodeError::LengthOverrun {
            declared,
            remaining: buf.len(),
        });
    }
    let (frame, rest) = buf.split_at(len);
    *buf = rest;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_default_record() {
        let record = read_record(&[]).unwrap();
        assert_eq!(record, ItemPreviewRecord::default());
    }

    #[test]
    fn test_scalar_fields() {
        // defindex 7, paintindex 44, rarity -10, origin 8
        let bytes = [
            0x18, 0x07, 0x20, 0x2C, 0x28, 0xF6, 0xFF, 0xFF, 0xFF, 0x0F, 0x70, 0x08,
        ];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.def_index, Some(7));
        assert_eq!(record.paint_index, Some(44));
        assert_eq!(record.rarity, -10);
        assert_eq!(record.origin, Some(8));
        assert!(record.quality.is_none());
    }

    #[test]
    fn test_unknown_field_skipped() {
        // field 63 varint, then rarity 5
        let bytes = [0xF8, 0x03, 0x2A, 0x28, 0x05];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.rarity, 5);
    }

    #[test]
    fn test_unknown_length_delimited_skipped() {
        // field 21 length-delimited (3 bytes), then rarity
        let bytes = [0xAA, 0x01, 0x03, 0xDE, 0xAD, 0xBE, 0x28, 0x05];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.rarity, 5);
    }

    #[test]
    fn test_known_field_with_wrong_wire_type_skipped() {
        // rarity (field 5) framed as fixed32 instead of varint
        let bytes = [0x2D, 0x01, 0x02, 0x03, 0x04, 0x18, 0x07];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.rarity, 0);
        assert_eq!(record.def_index, Some(7));
    }

    #[test]
    fn test_group_wire_type_rejected() {
        let bytes = [0x2B];
        assert!(matches!(
            read_record(&bytes),
            Err(DecodeError::InvalidWireType { number: 5, wire: 3 })
        ));
    }

    #[test]
    fn test_truncated_varint_rejected() {
        let bytes = [0x28, 0xF6, 0xFF];
        assert!(matches!(
            read_record(&bytes),
            Err(DecodeError::UnterminatedVarint)
        ));
    }

    #[test]
    fn test_unterminated_varint_rejected() {
        let mut bytes = vec![0x28];
        bytes.extend_from_slice(&[0xFF; 10]);
        bytes.push(0x00);
        assert!(matches!(
            read_record(&bytes),
            Err(DecodeError::VarintTooLong)
        ));
    }

    #[test]
    fn test_overrunning_length_rejected() {
        // customname declares 200 bytes but only 2 remain
        let bytes = [0x5A, 0xC8, 0x01, 0x41, 0x42];
        assert!(matches!(
            read_record(&bytes),
            Err(DecodeError::LengthOverrun { declared: 200, .. })
        ));
    }

    #[test]
    fn test_attachment_frame() {
        // sticker: slot 1, wear 1.0f32
        let bytes = [
            0x62, 0x07, 0x08, 0x01, 0x1D, 0x00, 0x00, 0x80, 0x3F,
        ];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.stickers.len(), 1);
        assert_eq!(record.stickers[0].slot, Some(1));
        assert_eq!(record.stickers[0].wear, Some(1.0));
    }

    #[test]
    fn test_attachment_unknown_field_tolerated() {
        // sticker frame holding unknown field 15 varint, then slot 3
        let bytes = [0x62, 0x04, 0x78, 0x2A, 0x08, 0x03];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.stickers[0].slot, Some(3));
    }

    #[test]
    fn test_repeated_attachments_keep_order() {
        let bytes = [
            0x62, 0x02, 0x08, 0x00, // sticker slot 0
            0x62, 0x02, 0x08, 0x01, // sticker slot 1
            0xA2, 0x01, 0x02, 0x08, 0x02, // keychain slot 2
        ];
        let record = read_record(&bytes).unwrap();
        assert_eq!(record.stickers.len(), 2);
        assert_eq!(record.stickers[0].slot, Some(0));
        assert_eq!(record.stickers[1].slot, Some(1));
        assert_eq!(record.keychains.len(), 1);
        assert_eq!(record.keychains[0].slot, Some(2));
    }

    #[test]
    fn test_truncated_fixed32_rejected() {
        // sticker wear with only 2 of 4 bytes
        let bytes = [0x62, 0x03, 0x1D, 0x00, 0x00];
        assert!(matches!(
            read_record(&bytes),
            Err(DecodeError::Truncated { needed: 4, .. })
        ));
    }
}
