use pretty_assertions::assert_eq;
use wasmdec::core::indices::*;
use wasmdec::core::instruction::*;
use wasmdec::core::types::{FuncType, GlobalType, Limits, MemType, Mut, TableType, ValType};
use wasmdec::core::{Code, CustomSection, Elem, Export, ExportDesc, Global, Import, ImportDesc, Name};
use wasmdec::{
    DecodeError, DecodeOptions, ErrorKind, Module, ReadModuleError, SectionHeader, SectionKind,
    decode_module, decode_module_with, decode_reader, decode_reader_with,
};

const PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

fn module_with(sections: &[u8]) -> Vec<u8> {
    let mut bytes = PREAMBLE.to_vec();
    bytes.extend_from_slice(sections);
    bytes
}

fn decode_wat(source: &str) -> Module {
    let bytes = wat::parse_str(source).unwrap();
    decode_module(&bytes).unwrap()
}

fn local_get(idx: u32) -> Instruction {
    Instruction::Local(LocalOp::Get, LocalIdx(idx))
}

fn i32_const(value: i32) -> Instruction {
    Instruction::Const(Const::I32(value))
}

#[test]
fn it_parses_preamble() {
    let mut input: &[u8] = &[];
    assert!(decode_module(input).is_err());

    input = &[0xD3, 0xAD, 0xBE, 0xEF];
    assert!(decode_module(input).is_err());

    input = &[0xD3, 0xAD, 0xBE, 0xEF, 0x00, 0x00, 0x00, 0x00];
    assert!(decode_module(input).is_err());

    // just the preamble
    assert_eq!(decode_module(&PREAMBLE).unwrap(), Module::default());
}

#[test]
fn it_accepts_empty_module() {
    assert_eq!(decode_wat("(module)"), Module::default());
}

#[test]
fn it_accepts_add_sample() {
    let bytes = module_with(&[
        0x01, 0x07, 0x01, 0x60, 0x02, 0x7F, 0x7F, 0x01, 0x7F, // type section
        0x03, 0x02, 0x01, 0x00, // function section
        0x07, 0x07, 0x01, 0x03, b'a', b'd', b'd', 0x00, 0x00, // export section
        0x0A, 0x09, 0x01, 0x07, 0x00, 0x20, 0x00, 0x20, 0x01, 0x6A, 0x0B, // code section
    ]);

    let section_headers = vec![
        SectionHeader {
            kind: SectionKind::Type,
            size: 7,
            offset: 10,
        },
        SectionHeader {
            kind: SectionKind::Function,
            size: 2,
            offset: 19,
        },
        SectionHeader {
            kind: SectionKind::Export,
            size: 7,
            offset: 23,
        },
        SectionHeader {
            kind: SectionKind::Code,
            size: 9,
            offset: 32,
        },
    ];

    let types = vec![FuncType {
        parameters: vec![ValType::I32, ValType::I32],
        results: vec![ValType::I32],
    }];

    let code = vec![Code {
        size: 7,
        locals: vec![],
        body: vec![
            local_get(0),
            local_get(1),
            Instruction::Numeric(NumericOp::I32Add),
        ],
    }];

    let exports = vec![Export {
        name: Name::from("add"),
        desc: ExportDesc::Func(FuncIdx(0)),
    }];

    let expected = Module {
        section_headers,
        types,
        functions: vec![TypeIdx(0)],
        exports,
        code,
        ..Default::default()
    };

    assert_eq!(decode_module(&bytes).unwrap(), expected);

    // the text format yields the same definitions
    let from_wat = decode_wat(
        r#"(module
            (func (export "add") (param i32 i32) (result i32)
                local.get 0
                local.get 1
                i32.add))"#,
    );
    assert_eq!(
        Module {
            section_headers: vec![],
            custom_sections: vec![],
            ..from_wat
        },
        Module {
            section_headers: vec![],
            ..expected
        }
    );
}

#[test]
fn it_accepts_imports_globals_tables_and_segments() {
    let module = decode_wat(
        r#"(module
            (type $unary (func (param i32) (result i32)))
            (type $sink (func (param i32)))
            (type $void (func))
            (import "env" "log" (func $log (type $sink)))
            (import "env" "mem" (memory 1 2))
            (table 2 funcref)
            (global $counter (mut i32) (i32.const 42))
            (global $limit i64 (i64.const -1))
            (export "id" (func $id))
            (export "counter" (global $counter))
            (start $main)
            (elem (i32.const 0) $id $main)
            (func $id (type $unary) (local.get 0))
            (func $main (type $void) (call $log (global.get $counter))))"#,
    );

    assert_eq!(
        module.types,
        vec![
            FuncType {
                parameters: vec![ValType::I32],
                results: vec![ValType::I32],
            },
            FuncType {
                parameters: vec![ValType::I32],
                results: vec![],
            },
            FuncType {
                parameters: vec![],
                results: vec![],
            },
        ]
    );

    assert_eq!(
        module.imports,
        vec![
            Import {
                module: Name::from("env"),
                name: Name::from("log"),
                desc: ImportDesc::Func(TypeIdx(1)),
            },
            Import {
                module: Name::from("env"),
                name: Name::from("mem"),
                desc: ImportDesc::Mem(MemType {
                    limits: Limits {
                        min: 1,
                        max: Some(2)
                    }
                }),
            },
        ]
    );

    assert_eq!(module.functions, vec![TypeIdx(0), TypeIdx(2)]);
    assert_eq!(
        module.tables,
        vec![TableType {
            limits: Limits { min: 2, max: None }
        }]
    );
    assert!(module.mems.is_empty());

    assert_eq!(
        module.globals,
        vec![
            Global {
                r#type: GlobalType(Mut::Var, ValType::I32),
                init: vec![i32_const(42)],
            },
            Global {
                r#type: GlobalType(Mut::Const, ValType::I64),
                init: vec![Instruction::Const(Const::I64(-1))],
            },
        ]
    );

    assert_eq!(
        module.exports,
        vec![
            Export {
                name: Name::from("id"),
                desc: ExportDesc::Func(FuncIdx(1)),
            },
            Export {
                name: Name::from("counter"),
                desc: ExportDesc::Global(GlobalIdx(0)),
            },
        ]
    );

    assert_eq!(module.start, Some(FuncIdx(2)));

    assert_eq!(
        module.elems,
        vec![Elem {
            table: TableIdx(0),
            offset: vec![i32_const(0)],
            init: vec![FuncIdx(1), FuncIdx(2)],
        }]
    );

    let bodies: Vec<_> = module.funcs().map(|(ty, code)| (ty, &code.body)).collect();
    assert_eq!(
        bodies,
        vec![
            (TypeIdx(0), &vec![local_get(0)]),
            (
                TypeIdx(2),
                &vec![
                    Instruction::Global(GlobalOp::Get, GlobalIdx(0)),
                    Instruction::Call(FuncIdx(0)),
                ]
            ),
        ]
    );
}

#[test]
fn it_builds_nested_blocks() {
    let module = decode_wat(
        r#"(module
            (func (param i32) (result i32)
                (block $outer (result i32)
                    (loop $inner
                        (br_if $inner (local.get 0)))
                    (if (result i32) (local.get 0)
                        (then (i32.const 1))
                        (else (i32.const 2))))))"#,
    );

    let expected = vec![Instruction::Block(Block {
        kind: BlockKind::Block,
        block_type: BlockType::Value(ValType::I32),
        body: vec![
            Instruction::Block(Block {
                kind: BlockKind::Loop,
                block_type: BlockType::Empty,
                body: vec![
                    local_get(0),
                    Instruction::Branch(BranchOp::BrIf, LabelIdx(0)),
                ],
                else_body: None,
            }),
            local_get(0),
            Instruction::Block(Block {
                kind: BlockKind::If,
                block_type: BlockType::Value(ValType::I32),
                body: vec![i32_const(1)],
                else_body: Some(vec![i32_const(2)]),
            }),
        ],
        else_body: None,
    })];

    assert_eq!(module.code[0].body, expected);
}

#[test]
fn it_decodes_branch_tables_and_indirect_calls() {
    let module = decode_wat(
        r#"(module
            (type $t (func))
            (table 1 funcref)
            (func (type $t)
                (block
                    (block
                        (br_table 0 1 1 (i32.const 0))))
                (call_indirect (type $t) (i32.const 0))))"#,
    );

    let empty_block = |body| {
        Instruction::Block(Block {
            kind: BlockKind::Block,
            block_type: BlockType::Empty,
            body,
            else_body: None,
        })
    };

    assert_eq!(
        module.code[0].body,
        vec![
            empty_block(vec![empty_block(vec![
                i32_const(0),
                Instruction::BrTable {
                    labels: vec![LabelIdx(0), LabelIdx(1)],
                    default: LabelIdx(1),
                },
            ])]),
            i32_const(0),
            Instruction::CallIndirect(TypeIdx(0)),
        ]
    );
}

#[test]
fn it_decodes_memory_and_float_instructions() {
    let module = decode_wat(
        r#"(module
            (memory 1)
            (func (result f64)
                (i32.store offset=8
                    (i32.const 0)
                    (i32.load8_u offset=4 align=1 (i32.const 16)))
                (drop (memory.grow (memory.size)))
                (f64.add (f64.const 0.5) (f64.promote_f32 (f32.const 1.5)))))"#,
    );

    assert_eq!(
        module.mems,
        vec![MemType {
            limits: Limits { min: 1, max: None }
        }]
    );
    assert_eq!(
        module.code[0].body,
        vec![
            i32_const(0),
            i32_const(16),
            Instruction::Memory(
                MemoryOp::I32Load8U,
                Memarg {
                    align: 0,
                    offset: 4
                }
            ),
            Instruction::Memory(
                MemoryOp::I32Store,
                Memarg {
                    align: 2,
                    offset: 8
                }
            ),
            Instruction::MemorySize(MemorySizeOp::Size),
            Instruction::MemorySize(MemorySizeOp::Grow),
            Instruction::Parametric(ParametricOp::Drop),
            Instruction::Const(Const::F64(0.5)),
            Instruction::Const(Const::F32(1.5)),
            Instruction::Numeric(NumericOp::F64PromoteF32),
            Instruction::Numeric(NumericOp::F64Add),
        ]
    );
}

#[test]
fn it_decodes_locals() {
    let module = decode_wat(
        r#"(module
            (func (local i32 i32) (local f64) (local i64)
                (local.set 3 (i64.const 7))))"#,
    );

    let code = &module.code[0];
    assert_eq!(
        code.expanded_locals().collect::<Vec<_>>(),
        vec![ValType::I32, ValType::I32, ValType::F64, ValType::I64]
    );
    assert_eq!(
        code.body,
        vec![
            Instruction::Const(Const::I64(7)),
            Instruction::Local(LocalOp::Set, LocalIdx(3)),
        ]
    );
}

#[test]
fn it_accepts_data_segments() {
    let bytes = module_with(&[
        0x05, 0x03, 0x01, 0x00, 0x01, // memory section: one memory, min 1
        0x0B, 0x09, 0x01, 0x00, 0x41, 0x08, 0x0B, 0x03, b'a', b'b', b'c', // data section
    ]);

    let module = decode_module(&bytes).unwrap();
    assert_eq!(
        module.datas,
        vec![wasmdec::core::Data {
            memory: MemIdx(0),
            offset: vec![i32_const(8)],
            init: b"abc".to_vec(),
        }]
    );
}

#[test]
fn it_keeps_custom_sections_in_order() {
    let bytes = module_with(&[
        0x00, 0x06, 0x05, b'f', b'i', b'r', b's', b't', // custom "first", no contents
        0x01, 0x01, 0x00, // empty type section
        0x00, 0x05, 0x03, b'z', 0xFF, 0x01, 0x02, // custom with a non-UTF-8 name
    ]);

    let module = decode_module(&bytes).unwrap();
    assert_eq!(
        module.custom_sections,
        vec![
            CustomSection {
                name: Name::from("first"),
                contents: vec![],
            },
            CustomSection {
                name: Name(vec![b'z', 0xFF, 0x01]),
                contents: vec![0x02],
            },
        ]
    );
    assert_eq!(module.custom_sections[1].name.as_str(), None);
}

#[test]
fn it_decodes_from_a_reader() {
    let bytes = wat::parse_str("(module (memory 2 3))").unwrap();
    let module = decode_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(
        module.mems,
        vec![MemType {
            limits: Limits {
                min: 2,
                max: Some(3)
            }
        }]
    );

    let err = decode_reader(&[0x00, 0x61, 0x73][..]).unwrap_err();
    assert!(matches!(
        err,
        ReadModuleError::Decode(DecodeError {
            kind: ErrorKind::TruncatedInput,
            ..
        })
    ));
}

#[test]
fn it_decodes_a_module_embedded_at_an_offset() {
    let mut bytes = b"header".to_vec();
    bytes.extend(wat::parse_str("(module (func))").unwrap());

    let options = DecodeOptions {
        start_offset: 6,
        ..Default::default()
    };
    let module = decode_module_with(&bytes, &options).unwrap();
    assert_eq!(module.functions, vec![TypeIdx(0)]);
    assert_eq!(module.section_headers[0].offset, 6 + 10);

    assert!(decode_module(&bytes).is_err());
}

#[test]
fn it_decodes_from_a_reader_with_options() {
    let mut bytes = vec![0xFF; 3];
    bytes.extend(wat::parse_str("(module (func (block (block))))").unwrap());

    let options = DecodeOptions {
        start_offset: 3,
        max_nesting_depth: 1,
    };
    let err = decode_reader_with(std::io::Cursor::new(&bytes), &options).unwrap_err();
    match err {
        ReadModuleError::Decode(DecodeError {
            kind: ErrorKind::NestingTooDeep { max: 1 },
            ..
        }) => {}
        other => panic!("unexpected error: {other:?}"),
    }

    let options = DecodeOptions {
        start_offset: 3,
        ..Default::default()
    };
    let module = decode_reader_with(std::io::Cursor::new(&bytes), &options).unwrap();
    assert_eq!(module.functions, vec![TypeIdx(0)]);
}
