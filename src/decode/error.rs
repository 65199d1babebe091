use crate::core::SectionKind;
use crate::core::types::{Mut, ValType};
use crate::decode::FromMarkerByte;
use std::fmt;
use thiserror::Error;

/// An error raised while decoding a module.
///
/// Decoding stops at the first error: no partially decoded module is ever returned.
/// `offset` is the position, in the decoded buffer, of the first byte of the
/// construct that could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at offset {offset:#x}")]
pub struct DecodeError {
    pub offset: usize,
    pub kind: ErrorKind,
}

impl DecodeError {
    pub fn new(offset: usize, kind: ErrorKind) -> Self {
        Self { offset, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("malformed {ty}: {reason}")]
    MalformedInteger {
        ty: IntegerType,
        reason: IntegerErrorReason,
    },

    #[error("invalid magic number: expected [00, 61, 73, 6D]; got {0:02X?}")]
    InvalidMagic([u8; 4]),

    #[error("unsupported version: expected [01, 00, 00, 00]; got {0:02X?}")]
    UnsupportedVersion([u8; 4]),

    #[error(
        "invalid section ID: expected one of {expected}; got {0:#04X}",
        expected = SectionKind::markers_formatted()
    )]
    InvalidSectionId(u8),

    #[error("invalid opcode: {0:#04X}")]
    InvalidOpcode(u8),

    #[error(
        "invalid value type: expected one of {expected}; got {0:#04X}",
        expected = ValType::markers_formatted()
    )]
    InvalidValueType(u8),

    #[error("invalid limits flag: expected 0x00 or 0x01; got {0:#04X}")]
    InvalidLimitsTag(u8),

    #[error(
        "invalid mutability: expected one of {expected}; got {0:#04X}",
        expected = Mut::markers_formatted()
    )]
    InvalidMutabilityTag(u8),

    #[error("invalid function type tag: expected 0x60; got {0:#04X}")]
    InvalidFuncTypeTag(u8),

    #[error("invalid table element type: expected 0x70 (funcref); got {0:#04X}")]
    InvalidElementType(u8),

    #[error(
        "invalid descriptor tag: expected 0x00 (func), 0x01 (table), 0x02 (mem) or 0x03 (global); got {0:#04X}"
    )]
    InvalidDescriptorTag(u8),

    #[error("invalid reserved byte: expected 0x00; got {0:#04X}")]
    InvalidReservedByte(u8),

    #[error("invalid block type: {0}")]
    InvalidBlockType(i64),

    #[error("unexpected `else` outside of an `if` block")]
    UnexpectedElse,

    #[error("blocks nested deeper than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("{section:?} section size mismatch: declared {declared} bytes; consumed {consumed}")]
    SectionSizeMismatch {
        section: SectionKind,
        declared: u32,
        consumed: usize,
    },

    #[error("function body size mismatch: declared {declared} bytes; consumed {consumed}")]
    FunctionSizeMismatch { declared: u32, consumed: usize },

    #[error("duplicate section: {0:?}")]
    DuplicateSection(SectionKind),

    #[error("out of order section: {current:?} cannot appear after {previous:?}")]
    SectionOutOfOrder {
        current: SectionKind,
        previous: SectionKind,
    },

    #[error("function section declares {functions} functions but code section has {bodies} bodies")]
    FunctionCodeCountMismatch { functions: usize, bodies: usize },

    #[error("too many locals: total count exceeds {max}", max = u32::MAX)]
    TooManyLocals,

    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(&'static str),
}

/// The integer encodings read by [`crate::decode::integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerType {
    U32,
    U64,
    I32,
    I64,
    S33,
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::S33 => "s33",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegerErrorReason {
    #[error("input ends before the terminating byte")]
    Unterminated,

    #[error("representation too long")]
    RepresentationTooLong,

    #[error("value does not fit in the target width")]
    TooLarge,
}
