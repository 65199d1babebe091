use crate::core::indices::{FuncIdx, GlobalIdx, MemIdx, TableIdx};
use crate::core::{Export, ExportDesc};
use crate::decode::helpers::{decode_name, decode_vector};
use crate::decode::{Cursor, DecodeError, ErrorKind};

pub(crate) fn decode_export_section(cursor: &mut Cursor<'_>) -> Result<Vec<Export>, DecodeError> {
    decode_vector(cursor, parse_export)
}

// Uniqueness of export names is a validation concern and not checked here.
fn parse_export(cursor: &mut Cursor<'_>) -> Result<Export, DecodeError> {
    let name = decode_name(cursor)?;

    let offset = cursor.position();
    let desc = match cursor.read_byte()? {
        0x00 => ExportDesc::Func(FuncIdx::decode(cursor)?),
        0x01 => ExportDesc::Table(TableIdx::decode(cursor)?),
        0x02 => ExportDesc::Mem(MemIdx::decode(cursor)?),
        0x03 => ExportDesc::Global(GlobalIdx::decode(cursor)?),
        b => return Err(DecodeError::new(offset, ErrorKind::InvalidDescriptorTag(b))),
    };

    Ok(Export { name, desc })
}
