use crate::core::indices::TypeIdx;
use crate::core::types::{GlobalType, MemType, TableType};
use crate::core::{Import, ImportDesc};
use crate::decode::helpers::{decode_name, decode_vector};
use crate::decode::{Cursor, DecodeError, ErrorKind};

pub(crate) fn decode_import_section(cursor: &mut Cursor<'_>) -> Result<Vec<Import>, DecodeError> {
    decode_vector(cursor, parse_import)
}

fn parse_import(cursor: &mut Cursor<'_>) -> Result<Import, DecodeError> {
    let module = decode_name(cursor)?;
    let name = decode_name(cursor)?;

    let offset = cursor.position();
    let desc = match cursor.read_byte()? {
        0x00 => ImportDesc::Func(TypeIdx::decode(cursor)?),
        0x01 => ImportDesc::Table(TableType::decode(cursor)?),
        0x02 => ImportDesc::Mem(MemType::decode(cursor)?),
        0x03 => ImportDesc::Global(GlobalType::decode(cursor)?),
        n => return Err(DecodeError::new(offset, ErrorKind::InvalidDescriptorTag(n))),
    };

    Ok(Import { module, name, desc })
}
