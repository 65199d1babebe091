use crate::core::CustomSection;
use crate::decode::helpers::decode_name;
use crate::decode::{Cursor, DecodeError};

/// Decodes a custom section whose payload ends at `end`: a name, then opaque contents
/// spanning the rest of the payload.
pub(crate) fn decode_custom_section(
    cursor: &mut Cursor<'_>,
    end: usize,
) -> Result<CustomSection, DecodeError> {
    let name = decode_name(cursor)?;
    // a name running past the declared end is reported as a size mismatch by the caller
    let contents = cursor
        .read_bytes(end.saturating_sub(cursor.position()))?
        .to_vec();

    Ok(CustomSection { name, contents })
}
