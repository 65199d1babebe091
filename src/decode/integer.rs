//! Helpers for decoding LEB128-encoded integers.
//!
//! Every value is accumulated in 7-bit groups, least significant first, with the high
//! bit of each byte flagging that another byte follows. An encoding may use at most
//! `ceil(N/7)` bytes for an N-bit integer, and the unused bits of its last byte must be
//! zero (unsigned) or a sign extension of the value (signed).
//!
//! <https://en.wikipedia.org/wiki/LEB128>
//! <https://www.w3.org/TR/wasm-core-1/#integers%E2%91%A4>
use crate::decode::{Cursor, DecodeError, ErrorKind, IntegerErrorReason, IntegerType};

pub fn decode_u32(cursor: &mut Cursor<'_>) -> Result<u32, DecodeError> {
    let start = cursor.position();
    let value = decode_unsigned(cursor, IntegerType::U32, 32)?;
    u32::try_from(value)
        .map_err(|_| malformed(start, IntegerType::U32, IntegerErrorReason::TooLarge))
}

pub fn decode_u64(cursor: &mut Cursor<'_>) -> Result<u64, DecodeError> {
    decode_unsigned(cursor, IntegerType::U64, 64)
}

pub fn decode_i32(cursor: &mut Cursor<'_>) -> Result<i32, DecodeError> {
    let start = cursor.position();
    let value = decode_signed(cursor, IntegerType::I32, 32)?;
    i32::try_from(value)
        .map_err(|_| malformed(start, IntegerType::I32, IntegerErrorReason::TooLarge))
}

pub fn decode_i64(cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
    decode_signed(cursor, IntegerType::I64, 64)
}

/// Decodes a 33-bit signed integer, as used by block types to encode a type index
/// without clashing with the single-byte value type markers.
///
/// The result always lies within `[-2^32, 2^32)`.
pub fn decode_s33(cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
    decode_signed(cursor, IntegerType::S33, 33)
}

fn malformed(offset: usize, ty: IntegerType, reason: IntegerErrorReason) -> DecodeError {
    DecodeError::new(offset, ErrorKind::MalformedInteger { ty, reason })
}

fn decode_unsigned(
    cursor: &mut Cursor<'_>,
    ty: IntegerType,
    bits: u32,
) -> Result<u64, DecodeError> {
    let start = cursor.position();
    let max_bytes = bits.div_ceil(7);

    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for i in 1..=max_bytes {
        let byte = cursor
            .read_byte()
            .map_err(|_| malformed(start, ty, IntegerErrorReason::Unterminated))?;
        let payload = u64::from(byte & 0b0111_1111 /* 0x7F */);

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit != 0 {
            if i == max_bytes {
                break;
            }

            result |= payload << shift;
            // payload is encoded in groups of 7 bits. We parsed a chunk, so move to
            // the next one
            shift += 7;
            continue;
        }

        // On the last byte fewer than 7 bits may be left for the payload. Ensure the
        // rest of those bits do not carry any.
        let remaining = bits - shift;
        if remaining < 7 && payload >> remaining != 0 {
            return Err(malformed(start, ty, IntegerErrorReason::TooLarge));
        }

        return Ok(result | payload << shift);
    }

    Err(malformed(start, ty, IntegerErrorReason::RepresentationTooLong))
}

fn decode_signed(cursor: &mut Cursor<'_>, ty: IntegerType, bits: u32) -> Result<i64, DecodeError> {
    let start = cursor.position();
    let max_bytes = bits.div_ceil(7);

    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for i in 1..=max_bytes {
        let byte = cursor
            .read_byte()
            .map_err(|_| malformed(start, ty, IntegerErrorReason::Unterminated))?;
        let payload = u64::from(byte & 0b0111_1111 /* 0x7F */);

        let continuation_bit = byte & 0b1000_0000 /* 0x80 */;
        if continuation_bit != 0 {
            if i == max_bytes {
                break;
            }

            result |= payload << shift;
            shift += 7;
            continue;
        }

        // On the last byte, the bits from the sign bit of the target width up to bit 6
        // must all be equal: either all ones (negative) or all zeros.
        let remaining = bits - shift;
        if remaining < 7 {
            let sign_bits = (0x7F >> (remaining - 1)) << (remaining - 1);
            let padding = payload & sign_bits;
            if padding != 0 && padding != sign_bits {
                return Err(malformed(start, ty, IntegerErrorReason::TooLarge));
            }
        }

        result |= payload << shift;
        shift += 7;

        // fill remaining high bits with ones, to sign-extend the value
        let is_negative = (byte & 0b0100_0000/* 0x40 */) != 0;
        if is_negative && shift < 64 {
            result |= !0u64 << shift;
        }

        return Ok(result as i64);
    }

    Err(malformed(start, ty, IntegerErrorReason::RepresentationTooLong))
}
