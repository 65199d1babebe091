use crate::core::types::MemType;
use crate::decode::types::limits::decode_limits;
use crate::decode::{Cursor, DecodeError};

impl MemType {
    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let limits = decode_limits(cursor)?;
        Ok(MemType { limits })
    }
}
