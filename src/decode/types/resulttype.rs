use crate::core::types::{ResultType, ValType};
use crate::decode::helpers::decode_vector;
use crate::decode::{Cursor, DecodeError};

pub(super) fn decode_result_type(cursor: &mut Cursor<'_>) -> Result<ResultType, DecodeError> {
    decode_vector(cursor, ValType::decode)
}
