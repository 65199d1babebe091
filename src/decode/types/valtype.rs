use crate::core::types::ValType;
use crate::decode::{Cursor, DecodeError, ErrorKind, FromMarkerByte};
use phf::phf_ordered_map;

// Valid marker bytes for [ValType].
#[expect(non_upper_case_globals)]
static ValType_MARKERS: phf::OrderedMap<u8, ValType> = phf_ordered_map! {
    0x7Fu8 => ValType::I32,
    0x7Eu8 => ValType::I64,
    0x7Du8 => ValType::F32,
    0x7Cu8 => ValType::F64,
};

impl ValType {
    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Self::read_marker(cursor)
    }

    /// Whether `b` encodes a value type. Block types use this to tell a single
    /// result type apart from a type index.
    pub(crate) fn is_marker(b: u8) -> bool {
        ValType_MARKERS.contains_key(&b)
    }
}

impl FromMarkerByte for ValType {
    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &ValType_MARKERS
    }

    fn invalid_marker(b: u8) -> ErrorKind {
        ErrorKind::InvalidValueType(b)
    }
}
