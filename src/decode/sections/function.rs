use crate::core::indices::TypeIdx;
use crate::decode::helpers::decode_vector;
use crate::decode::{Cursor, DecodeError};

/// Decodes the type index of every function defined in the module. Their bodies follow
/// later, in the code section.
pub(crate) fn decode_function_section(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<TypeIdx>, DecodeError> {
    decode_vector(cursor, TypeIdx::decode)
}
