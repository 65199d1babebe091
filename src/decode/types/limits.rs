use crate::core::types::Limits;
use crate::decode::integer::decode_u32;
use crate::decode::{Cursor, DecodeError, ErrorKind};

pub(super) fn decode_limits(cursor: &mut Cursor<'_>) -> Result<Limits, DecodeError> {
    let offset = cursor.position();
    let has_max = match cursor.read_byte()? {
        0x00 => false,
        0x01 => true,
        n => return Err(DecodeError::new(offset, ErrorKind::InvalidLimitsTag(n))),
    };

    let min = decode_u32(cursor)?;
    let max = if has_max {
        Some(decode_u32(cursor)?)
    } else {
        None
    };

    Ok(Limits { min, max })
}
