use crate::core::types::TableType;
use crate::decode::helpers::decode_vector;
use crate::decode::{Cursor, DecodeError};

pub(crate) fn decode_table_section(cursor: &mut Cursor<'_>) -> Result<Vec<TableType>, DecodeError> {
    decode_vector(cursor, TableType::decode)
}
