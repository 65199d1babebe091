use crate::core::Elem;
use crate::core::indices::{FuncIdx, TableIdx};
use crate::decode::helpers::decode_vector;
use crate::decode::instructions::decode_expr;
use crate::decode::{Cursor, DecodeError, DecodeOptions};

pub(crate) fn decode_element_section(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<Vec<Elem>, DecodeError> {
    decode_vector(cursor, |c| parse_elem(c, options))
}

fn parse_elem(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Elem, DecodeError> {
    let table = TableIdx::decode(cursor)?;
    let offset = decode_expr(cursor, options)?;
    let init = decode_vector(cursor, FuncIdx::decode)?;

    Ok(Elem {
        table,
        offset,
        init,
    })
}
