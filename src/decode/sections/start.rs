use crate::core::indices::FuncIdx;
use crate::decode::{Cursor, DecodeError};

pub(crate) fn decode_start_section(cursor: &mut Cursor<'_>) -> Result<FuncIdx, DecodeError> {
    FuncIdx::decode(cursor)
}
