use crate::core::types::{GlobalType, Mut, ValType};
use crate::decode::{Cursor, DecodeError, ErrorKind, FromMarkerByte};
use phf::phf_ordered_map;

impl GlobalType {
    pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let valtype = ValType::decode(cursor)?;
        let r#mut = Mut::read_marker(cursor)?;

        Ok(GlobalType(r#mut, valtype))
    }
}

// Valid marker bytes for [Mut].
#[expect(non_upper_case_globals)]
static Mut_MARKERS: phf::OrderedMap<u8, Mut> = phf_ordered_map! {
    0x00u8 => Mut::Const,
    0x01u8 => Mut::Var,
};

impl FromMarkerByte for Mut {
    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &Mut_MARKERS
    }

    fn invalid_marker(b: u8) -> ErrorKind {
        ErrorKind::InvalidMutabilityTag(b)
    }
}
