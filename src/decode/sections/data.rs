use crate::core::Data;
use crate::core::indices::MemIdx;
use crate::decode::helpers::{decode_byte_vector, decode_vector};
use crate::decode::instructions::decode_expr;
use crate::decode::{Cursor, DecodeError, DecodeOptions};

pub(crate) fn decode_data_section(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<Vec<Data>, DecodeError> {
    decode_vector(cursor, |c| parse_data(c, options))
}

fn parse_data(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Data, DecodeError> {
    let memory = MemIdx::decode(cursor)?;
    let offset = decode_expr(cursor, options)?;
    let init = decode_byte_vector(cursor)?;

    Ok(Data {
        memory,
        offset,
        init,
    })
}
