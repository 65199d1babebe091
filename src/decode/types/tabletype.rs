use crate::core::types::TableType;
use crate::decode::types::limits::decode_limits;
use crate::decode::{Cursor, DecodeError, ErrorKind};

impl TableType {
    /// The only element type tables may hold.
    const FUNCREF: u8 = 0x70;

    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let offset = cursor.position();
        let elemtype = cursor.read_byte()?;
        if elemtype != Self::FUNCREF {
            return Err(DecodeError::new(
                offset,
                ErrorKind::InvalidElementType(elemtype),
            ));
        }

        let limits = decode_limits(cursor)?;
        Ok(TableType { limits })
    }
}
