use crate::core::types::MemType;
use crate::decode::helpers::decode_vector;
use crate::decode::{Cursor, DecodeError};

pub(crate) fn decode_memory_section(cursor: &mut Cursor<'_>) -> Result<Vec<MemType>, DecodeError> {
    decode_vector(cursor, MemType::decode)
}
