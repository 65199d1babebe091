use crate::core::types::ValType;
use crate::core::{Code, Local};
use crate::decode::helpers::decode_vector;
use crate::decode::instructions::decode_expr;
use crate::decode::integer::decode_u32;
use crate::decode::{Cursor, DecodeError, DecodeOptions, ErrorKind};
use log::trace;

pub(crate) fn decode_code_section(
    cursor: &mut Cursor<'_>,
    options: &DecodeOptions,
) -> Result<Vec<Code>, DecodeError> {
    decode_vector(cursor, |c| parse_code(c, options))
}

fn parse_code(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Code, DecodeError> {
    let size = decode_u32(cursor)?;
    let start = cursor.position();

    let mut expanded_locals: u64 = 0;
    let locals = decode_vector(cursor, |c| parse_code_local(c, &mut expanded_locals))?;
    let body = decode_expr(cursor, options)?;

    let consumed = cursor.position() - start;
    if usize::try_from(size).ok() != Some(consumed) {
        return Err(DecodeError::new(
            start,
            ErrorKind::FunctionSizeMismatch {
                declared: size,
                consumed,
            },
        ));
    }

    trace!(
        "code entry at {start:#x}: {size} bytes, {expanded_locals} locals, {} top-level instructions",
        body.len()
    );

    Ok(Code { size, locals, body })
}

fn parse_code_local(
    cursor: &mut Cursor<'_>,
    expanded_locals: &mut u64,
) -> Result<Local, DecodeError> {
    let offset = cursor.position();
    let count = decode_u32(cursor)?;

    *expanded_locals += u64::from(count);
    if *expanded_locals > u64::from(u32::MAX) {
        return Err(DecodeError::new(offset, ErrorKind::TooManyLocals));
    }

    Ok(Local {
        count,
        t: ValType::decode(cursor)?,
    })
}
