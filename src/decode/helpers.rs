use crate::core::Name;
use crate::decode::integer::decode_u32;
use crate::decode::{Cursor, DecodeError};

/// Decodes a u32 length followed by that many elements, each decoded by `parse_fn`.
///
/// Preallocation is capped by the bytes left in the buffer, since every element takes
/// at least one byte.
pub(crate) fn decode_vector<'a, F, T>(
    cursor: &mut Cursor<'a>,
    mut parse_fn: F,
) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&mut Cursor<'a>) -> Result<T, DecodeError>,
{
    let len = decode_u32(cursor)?;

    let mut items = Vec::with_capacity(capacity_for(len, cursor));
    for _ in 0..len {
        items.push(parse_fn(cursor)?);
    }

    Ok(items)
}

fn capacity_for(len: u32, cursor: &Cursor<'_>) -> usize {
    usize::try_from(len).map_or(cursor.remaining(), |len| len.min(cursor.remaining()))
}

pub(crate) fn decode_byte_vector(cursor: &mut Cursor<'_>) -> Result<Vec<u8>, DecodeError> {
    let len = decode_u32(cursor)?;
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    Ok(cursor.read_bytes(len)?.to_vec())
}

pub(crate) fn decode_name(cursor: &mut Cursor<'_>) -> Result<Name, DecodeError> {
    decode_byte_vector(cursor).map(Name)
}

pub(crate) fn decode_f32(cursor: &mut Cursor<'_>) -> Result<f32, DecodeError> {
    Ok(f32::from_le_bytes(cursor.read_array()?))
}

pub(crate) fn decode_f64(cursor: &mut Cursor<'_>) -> Result<f64, DecodeError> {
    Ok(f64::from_le_bytes(cursor.read_array()?))
}
