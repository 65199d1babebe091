use crate::core::Global;
use crate::core::types::GlobalType;
use crate::decode::helpers::decode_vector;
use crate::decode::instructions::decode_expr;
use crate::decode::{Cursor, DecodeError, DecodeOptions};

pub(crate) fn decode_global_section(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<Vec<Global>, DecodeError> {
    decode_vector(cursor, |c| parse_global(c, options))
}

fn parse_global(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Global, DecodeError> {
    Ok(Global {
        r#type: GlobalType::decode(cursor)?,
        init: decode_expr(cursor, options)?,
    })
}
