use crate::core::types::FuncType;
use crate::decode::helpers::decode_vector;
use crate::decode::{Cursor, DecodeError};

pub(crate) fn decode_type_section(cursor: &mut Cursor<'_>) -> Result<Vec<FuncType>, DecodeError> {
    decode_vector(cursor, FuncType::decode)
}
