use crate::core::{Module, SectionHeader, SectionKind};
use crate::decode::integer::decode_u32;
use crate::decode::sections::*;
use crate::decode::{Cursor, DecodeError, DecodeOptions, ErrorKind, FromMarkerByte};
use log::debug;
use phf::phf_ordered_map;
use std::collections::HashSet;

/// The magic number opening every module: `\0asm`.
pub const MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

/// The only binary format version this decoder understands.
pub const VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

// Valid marker bytes for [SectionKind].
#[expect(non_upper_case_globals)]
static SectionId_MARKERS: phf::OrderedMap<u8, SectionKind> = phf_ordered_map! {
    0u8 => SectionKind::Custom,
    1u8 => SectionKind::Type,
    2u8 => SectionKind::Import,
    3u8 => SectionKind::Function,
    4u8 => SectionKind::Table,
    5u8 => SectionKind::Memory,
    6u8 => SectionKind::Global,
    7u8 => SectionKind::Export,
    8u8 => SectionKind::Start,
    9u8 => SectionKind::Element,
    10u8 => SectionKind::Code,
    11u8 => SectionKind::Data,
};

impl FromMarkerByte for SectionKind {
    fn markers() -> &'static phf::OrderedMap<u8, Self> {
        &SectionId_MARKERS
    }

    fn invalid_marker(b: u8) -> ErrorKind {
        ErrorKind::InvalidSectionId(b)
    }
}

/// Enforces that non-custom sections appear at most once and in increasing id order.
/// Custom sections may appear anywhere in the module and any number of times.
#[derive(Default)]
struct SectionOrder {
    seen: HashSet<SectionKind>,
    previous: Option<SectionKind>,
}

impl SectionOrder {
    fn check(&mut self, header: &SectionHeader, offset: usize) -> Result<(), DecodeError> {
        let current = header.kind;
        if current == SectionKind::Custom {
            return Ok(());
        }

        if !self.seen.insert(current) {
            return Err(DecodeError::new(
                offset,
                ErrorKind::DuplicateSection(current),
            ));
        }

        if let Some(previous) = self.previous
            && current < previous
        {
            return Err(DecodeError::new(
                offset,
                ErrorKind::SectionOutOfOrder { current, previous },
            ));
        }

        self.previous = Some(current);
        Ok(())
    }
}

/// Decode the module starting at `options.start_offset` in `input`, up to the end of
/// the buffer.
pub fn decode_module(input: &[u8], options: &DecodeOptions) -> Result<Module, DecodeError> {
    let mut cursor = Cursor::with_position(input, options.start_offset);
    parse_preamble(&mut cursor)?;

    let mut module = Module::default();
    let mut order = SectionOrder::default();

    while !cursor.at_end() {
        let header_offset = cursor.position();
        let header = decode_section_header(&mut cursor)?;
        debug!(
            "{:?} section at {:#x}: {} bytes",
            header.kind, header.offset, header.size
        );

        order.check(&header, header_offset)?;

        let end = header.offset.saturating_add(payload_len(header.size));
        match header.kind {
            SectionKind::Custom => module
                .custom_sections
                .push(decode_custom_section(&mut cursor, end)?),
            SectionKind::Type => module.types = decode_type_section(&mut cursor)?,
            SectionKind::Import => module.imports = decode_import_section(&mut cursor)?,
            SectionKind::Function => module.functions = decode_function_section(&mut cursor)?,
            SectionKind::Table => module.tables = decode_table_section(&mut cursor)?,
            SectionKind::Memory => module.mems = decode_memory_section(&mut cursor)?,
            SectionKind::Global => module.globals = decode_global_section(&mut cursor, options)?,
            SectionKind::Export => module.exports = decode_export_section(&mut cursor)?,
            SectionKind::Start => module.start = Some(decode_start_section(&mut cursor)?),
            SectionKind::Element => module.elems = decode_element_section(&mut cursor, options)?,
            SectionKind::Code => module.code = decode_code_section(&mut cursor, options)?,
            SectionKind::Data => module.datas = decode_data_section(&mut cursor, options)?,
        }

        let consumed = cursor.position() - header.offset;
        if consumed != payload_len(header.size) {
            return Err(DecodeError::new(
                header.offset,
                ErrorKind::SectionSizeMismatch {
                    section: header.kind,
                    declared: header.size,
                    consumed,
                },
            ));
        }

        module.section_headers.push(header);
    }

    // The lengths of vectors produced by the (possibly absent) function and code
    // sections must match up
    if module.functions.len() != module.code.len() {
        return Err(cursor.error(ErrorKind::FunctionCodeCountMismatch {
            functions: module.functions.len(),
            bodies: module.code.len(),
        }));
    }

    debug!(
        "decoded module: {} sections, {} types, {} imports, {} functions, {} exports",
        module.section_headers.len(),
        module.types.len(),
        module.imports.len(),
        module.functions.len(),
        module.exports.len()
    );

    Ok(module)
}

fn payload_len(size: u32) -> usize {
    usize::try_from(size).unwrap_or(usize::MAX)
}

fn parse_preamble(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    let offset = cursor.position();
    let magic = cursor.read_array::<4>()?;
    if magic != MAGIC {
        return Err(DecodeError::new(offset, ErrorKind::InvalidMagic(magic)));
    }

    let offset = cursor.position();
    let version = cursor.read_array::<4>()?;
    if version != VERSION {
        return Err(DecodeError::new(offset, ErrorKind::UnsupportedVersion(version)));
    }

    Ok(())
}

fn decode_section_header(cursor: &mut Cursor<'_>) -> Result<SectionHeader, DecodeError> {
    let kind = SectionKind::read_marker(cursor)?;
    let size = decode_u32(cursor)?;

    Ok(SectionHeader {
        kind,
        size,
        offset: cursor.position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

    fn module_with(sections: &[u8]) -> Vec<u8> {
        let mut bytes = PREAMBLE.to_vec();
        bytes.extend_from_slice(sections);
        bytes
    }

    fn decode(bytes: &[u8]) -> Result<Module, DecodeError> {
        decode_module(bytes, &DecodeOptions::default())
    }

    #[test]
    fn bare_preamble_is_the_empty_module() {
        assert_eq!(decode(&PREAMBLE).unwrap(), Module::default());
    }

    #[test]
    fn decoding_starts_at_start_offset() {
        let mut bytes = vec![0xAA, 0xBB];
        bytes.extend(module_with(&[0x05, 0x03, 0x01, 0x00, 0x01]));
        let options = DecodeOptions {
            start_offset: 2,
            ..Default::default()
        };

        let module = decode_module(&bytes, &options).unwrap();
        assert_eq!(
            module.section_headers,
            vec![SectionHeader {
                kind: SectionKind::Memory,
                size: 3,
                offset: 12
            }]
        );
    }

    #[test]
    fn rejects_bad_magic_and_version() {
        let err = decode(&[0x00, 0x61, 0x73, 0x00, 0x01, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::new(0, ErrorKind::InvalidMagic([0x00, 0x61, 0x73, 0x00]))
        );

        let err = decode(&[0x00, 0x61, 0x73, 0x6D, 0x02, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::new(4, ErrorKind::UnsupportedVersion([0x02, 0x00, 0x00, 0x00]))
        );
    }

    #[test]
    fn rejects_unknown_section_id() {
        let err = decode(&module_with(&[0x0C, 0x01, 0x00])).unwrap_err();
        assert_eq!(err, DecodeError::new(8, ErrorKind::InvalidSectionId(0x0C)));
    }

    #[test]
    fn duplicate_section_is_rejected_even_when_not_adjacent() {
        // type, memory, custom, type
        let err = decode(&module_with(&[
            0x01, 0x01, 0x00, //
            0x05, 0x01, 0x00, //
            0x00, 0x01, 0x00, //
            0x01, 0x01, 0x00,
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::new(17, ErrorKind::DuplicateSection(SectionKind::Type))
        );
    }

    #[test]
    fn out_of_order_section_is_rejected() {
        // memory, then type
        let err = decode(&module_with(&[0x05, 0x01, 0x00, 0x01, 0x01, 0x00])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::new(
                11,
                ErrorKind::SectionOutOfOrder {
                    current: SectionKind::Type,
                    previous: SectionKind::Memory,
                }
            )
        );
    }

    #[test]
    fn section_size_must_match_payload() {
        // a type section holding no types is one byte long
        for (declared, consumed) in [(2, 1), (0, 1)] {
            let err = decode(&module_with(&[0x01, declared, 0x00, 0x00, 0x0B])).unwrap_err();
            assert_eq!(
                err,
                DecodeError::new(
                    10,
                    ErrorKind::SectionSizeMismatch {
                        section: SectionKind::Type,
                        declared: declared.into(),
                        consumed,
                    }
                )
            );
        }
    }

    #[test]
    fn function_without_code_is_rejected() {
        // one function of type 0, no code section
        let err = decode(&module_with(&[0x03, 0x02, 0x01, 0x00])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::new(
                12,
                ErrorKind::FunctionCodeCountMismatch {
                    functions: 1,
                    bodies: 0
                }
            )
        );
    }

    #[test]
    fn custom_sections_may_appear_anywhere() {
        let module = decode(&module_with(&[
            0x00, 0x03, 0x01, b'a', 0xFF, //
            0x01, 0x01, 0x00, //
            0x00, 0x02, 0x01, b'b',
        ]))
        .unwrap();
        let names: Vec<_> = module
            .custom_sections
            .iter()
            .map(|c| c.name.to_string())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(module.custom_sections[0].contents, vec![0xFF]);
        assert_eq!(
            module
                .section_headers
                .iter()
                .map(|h| h.kind)
                .collect::<Vec<_>>(),
            vec![SectionKind::Custom, SectionKind::Type, SectionKind::Custom]
        );
    }
}
