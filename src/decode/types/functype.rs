use crate::core::types::FuncType;
use crate::decode::types::resulttype::decode_result_type;
use crate::decode::{Cursor, DecodeError, ErrorKind};

impl FuncType {
    const MARKER_BYTE: u8 = 0x60;

    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let offset = cursor.position();
        let b = cursor.read_byte()?;
        if b != Self::MARKER_BYTE {
            return Err(DecodeError::new(offset, ErrorKind::InvalidFuncTypeTag(b)));
        }

        let parameters = decode_result_type(cursor)?;
        let results = decode_result_type(cursor)?;

        Ok(FuncType {
            parameters,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ValType;

    #[test]
    fn decodes_parameters_then_results() {
        let bytes = [0x60, 0x02, 0x7F, 0x7E, 0x01, 0x7C];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(
            FuncType::decode(&mut cursor).unwrap(),
            FuncType {
                parameters: vec![ValType::I32, ValType::I64],
                results: vec![ValType::F64],
            }
        );
        assert!(cursor.at_end());
    }

    #[test]
    fn rejects_other_tags() {
        let err = FuncType::decode(&mut Cursor::new(&[0x5F, 0x00, 0x00])).unwrap_err();
        assert_eq!(err, DecodeError::new(0, ErrorKind::InvalidFuncTypeTag(0x5F)));
    }
}
