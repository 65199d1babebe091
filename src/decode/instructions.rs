//! WebAssembly instruction decoding.
//!
//! Defined in <https://www.w3.org/TR/wasm-core-1/#instructions%E2%91%A6>
use crate::core::indices::{FuncIdx, GlobalIdx, LabelIdx, LocalIdx, TypeIdx};
use crate::core::instruction::{
    Block, BlockKind, BlockType, BranchOp, Const, ControlOp, Expr, GlobalOp, Instruction, LocalOp,
    Memarg, MemoryOp, MemorySizeOp, NumericOp, ParametricOp,
};
use crate::core::types::ValType;
use crate::decode::helpers::{decode_f32, decode_f64, decode_vector};
use crate::decode::integer::{decode_i32, decode_i64, decode_s33, decode_u32};
use crate::decode::{Cursor, DecodeError, DecodeOptions, ErrorKind};
use phf::phf_map;

const END: u8 = 0x0B;
const ELSE: u8 = 0x05;

// Loads and stores, all followed by a [Memarg].
static MEMORY_OPS: phf::Map<u8, MemoryOp> = phf_map! {
    0x28u8 => MemoryOp::I32Load,
    0x29u8 => MemoryOp::I64Load,
    0x2Au8 => MemoryOp::F32Load,
    0x2Bu8 => MemoryOp::F64Load,
    0x2Cu8 => MemoryOp::I32Load8S,
    0x2Du8 => MemoryOp::I32Load8U,
    0x2Eu8 => MemoryOp::I32Load16S,
    0x2Fu8 => MemoryOp::I32Load16U,
    0x30u8 => MemoryOp::I64Load8S,
    0x31u8 => MemoryOp::I64Load8U,
    0x32u8 => MemoryOp::I64Load16S,
    0x33u8 => MemoryOp::I64Load16U,
    0x34u8 => MemoryOp::I64Load32S,
    0x35u8 => MemoryOp::I64Load32U,
    0x36u8 => MemoryOp::I32Store,
    0x37u8 => MemoryOp::I64Store,
    0x38u8 => MemoryOp::F32Store,
    0x39u8 => MemoryOp::F64Store,
    0x3Au8 => MemoryOp::I32Store8,
    0x3Bu8 => MemoryOp::I32Store16,
    0x3Cu8 => MemoryOp::I64Store8,
    0x3Du8 => MemoryOp::I64Store16,
    0x3Eu8 => MemoryOp::I64Store32,
};

// Numeric operators, fully determined by their opcode.
static NUMERIC_OPS: phf::Map<u8, NumericOp> = phf_map! {
    0x45u8 => NumericOp::I32Eqz,
    0x46u8 => NumericOp::I32Eq,
    0x47u8 => NumericOp::I32Ne,
    0x48u8 => NumericOp::I32LtS,
    0x49u8 => NumericOp::I32LtU,
    0x4Au8 => NumericOp::I32GtS,
    0x4Bu8 => NumericOp::I32GtU,
    0x4Cu8 => NumericOp::I32LeS,
    0x4Du8 => NumericOp::I32LeU,
    0x4Eu8 => NumericOp::I32GeS,
    0x4Fu8 => NumericOp::I32GeU,
    0x50u8 => NumericOp::I64Eqz,
    0x51u8 => NumericOp::I64Eq,
    0x52u8 => NumericOp::I64Ne,
    0x53u8 => NumericOp::I64LtS,
    0x54u8 => NumericOp::I64LtU,
    0x55u8 => NumericOp::I64GtS,
    0x56u8 => NumericOp::I64GtU,
    0x57u8 => NumericOp::I64LeS,
    0x58u8 => NumericOp::I64LeU,
    0x59u8 => NumericOp::I64GeS,
    0x5Au8 => NumericOp::I64GeU,
    0x5Bu8 => NumericOp::F32Eq,
    0x5Cu8 => NumericOp::F32Ne,
    0x5Du8 => NumericOp::F32Lt,
    0x5Eu8 => NumericOp::F32Gt,
    0x5Fu8 => NumericOp::F32Le,
    0x60u8 => NumericOp::F32Ge,
    0x61u8 => NumericOp::F64Eq,
    0x62u8 => NumericOp::F64Ne,
    0x63u8 => NumericOp::F64Lt,
    0x64u8 => NumericOp::F64Gt,
    0x65u8 => NumericOp::F64Le,
    0x66u8 => NumericOp::F64Ge,
    0x67u8 => NumericOp::I32Clz,
    0x68u8 => NumericOp::I32Ctz,
    0x69u8 => NumericOp::I32Popcnt,
    0x6Au8 => NumericOp::I32Add,
    0x6Bu8 => NumericOp::I32Sub,
    0x6Cu8 => NumericOp::I32Mul,
    0x6Du8 => NumericOp::I32DivS,
    0x6Eu8 => NumericOp::I32DivU,
    0x6Fu8 => NumericOp::I32RemS,
    0x70u8 => NumericOp::I32RemU,
    0x71u8 => NumericOp::I32And,
    0x72u8 => NumericOp::I32Or,
    0x73u8 => NumericOp::I32Xor,
    0x74u8 => NumericOp::I32Shl,
    0x75u8 => NumericOp::I32ShrS,
    0x76u8 => NumericOp::I32ShrU,
    0x77u8 => NumericOp::I32Rotl,
    0x78u8 => NumericOp::I32Rotr,
    0x79u8 => NumericOp::I64Clz,
    0x7Au8 => NumericOp::I64Ctz,
    0x7Bu8 => NumericOp::I64Popcnt,
    0x7Cu8 => NumericOp::I64Add,
    0x7Du8 => NumericOp::I64Sub,
    0x7Eu8 => NumericOp::I64Mul,
    0x7Fu8 => NumericOp::I64DivS,
    0x80u8 => NumericOp::I64DivU,
    0x81u8 => NumericOp::I64RemS,
    0x82u8 => NumericOp::I64RemU,
    0x83u8 => NumericOp::I64And,
    0x84u8 => NumericOp::I64Or,
    0x85u8 => NumericOp::I64Xor,
    0x86u8 => NumericOp::I64Shl,
    0x87u8 => NumericOp::I64ShrS,
    0x88u8 => NumericOp::I64ShrU,
    0x89u8 => NumericOp::I64Rotl,
    0x8Au8 => NumericOp::I64Rotr,
    0x8Bu8 => NumericOp::F32Abs,
    0x8Cu8 => NumericOp::F32Neg,
    0x8Du8 => NumericOp::F32Ceil,
    0x8Eu8 => NumericOp::F32Floor,
    0x8Fu8 => NumericOp::F32Trunc,
    0x90u8 => NumericOp::F32Nearest,
    0x91u8 => NumericOp::F32Sqrt,
    0x92u8 => NumericOp::F32Add,
    0x93u8 => NumericOp::F32Sub,
    0x94u8 => NumericOp::F32Mul,
    0x95u8 => NumericOp::F32Div,
    0x96u8 => NumericOp::F32Min,
    0x97u8 => NumericOp::F32Max,
    0x98u8 => NumericOp::F32Copysign,
    0x99u8 => NumericOp::F64Abs,
    0x9Au8 => NumericOp::F64Neg,
    0x9Bu8 => NumericOp::F64Ceil,
    0x9Cu8 => NumericOp::F64Floor,
    0x9Du8 => NumericOp::F64Trunc,
    0x9Eu8 => NumericOp::F64Nearest,
    0x9Fu8 => NumericOp::F64Sqrt,
    0xA0u8 => NumericOp::F64Add,
    0xA1u8 => NumericOp::F64Sub,
    0xA2u8 => NumericOp::F64Mul,
    0xA3u8 => NumericOp::F64Div,
    0xA4u8 => NumericOp::F64Min,
    0xA5u8 => NumericOp::F64Max,
    0xA6u8 => NumericOp::F64Copysign,
    0xA7u8 => NumericOp::I32WrapI64,
    0xA8u8 => NumericOp::I32TruncF32S,
    0xA9u8 => NumericOp::I32TruncF32U,
    0xAAu8 => NumericOp::I32TruncF64S,
    0xABu8 => NumericOp::I32TruncF64U,
    0xACu8 => NumericOp::I64ExtendI32S,
    0xADu8 => NumericOp::I64ExtendI32U,
    0xAEu8 => NumericOp::I64TruncF32S,
    0xAFu8 => NumericOp::I64TruncF32U,
    0xB0u8 => NumericOp::I64TruncF64S,
    0xB1u8 => NumericOp::I64TruncF64U,
    0xB2u8 => NumericOp::F32ConvertI32S,
    0xB3u8 => NumericOp::F32ConvertI32U,
    0xB4u8 => NumericOp::F32ConvertI64S,
    0xB5u8 => NumericOp::F32ConvertI64U,
    0xB6u8 => NumericOp::F32DemoteF64,
    0xB7u8 => NumericOp::F64ConvertI32S,
    0xB8u8 => NumericOp::F64ConvertI32U,
    0xB9u8 => NumericOp::F64ConvertI64S,
    0xBAu8 => NumericOp::F64ConvertI64U,
    0xBBu8 => NumericOp::F64PromoteF32,
    0xBCu8 => NumericOp::I32ReinterpretF32,
    0xBDu8 => NumericOp::I64ReinterpretF64,
    0xBEu8 => NumericOp::F32ReinterpretI32,
    0xBFu8 => NumericOp::F64ReinterpretI64,
    0xC0u8 => NumericOp::I32Extend8S,
    0xC1u8 => NumericOp::I32Extend16S,
    0xC2u8 => NumericOp::I64Extend8S,
    0xC3u8 => NumericOp::I64Extend16S,
    0xC4u8 => NumericOp::I64Extend32S,
};
/// Opcodes of later proposals, reported by name rather than as invalid opcodes.
static UNSUPPORTED_OPCODES: phf::Map<u8, &'static str> = phf_map! {
    0x06u8 => "try (exception handling)",
    0x07u8 => "catch (exception handling)",
    0x08u8 => "throw (exception handling)",
    0x09u8 => "rethrow (exception handling)",
    0x12u8 => "return_call (tail calls)",
    0x13u8 => "return_call_indirect (tail calls)",
    0x1Cu8 => "typed select (reference types)",
    0x25u8 => "table.get (reference types)",
    0x26u8 => "table.set (reference types)",
    0xD0u8 => "ref.null (reference types)",
    0xD1u8 => "ref.is_null (reference types)",
    0xD2u8 => "ref.func (reference types)",
    0xFCu8 => "0xFC-prefixed instruction (bulk memory, saturating truncation)",
    0xFDu8 => "0xFD-prefixed instruction (SIMD)",
};

/// Tracks how deeply structured instructions are nested.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Nesting {
    depth: usize,
    max: usize,
}

impl Nesting {
    pub(crate) fn new(options: &DecodeOptions) -> Self {
        Self {
            depth: 0,
            max: options.max_nesting_depth,
        }
    }

    /// One level deeper, for the body of the block whose opcode is at `offset`.
    fn enter(self, offset: usize) -> Result<Self, DecodeError> {
        if self.depth >= self.max {
            return Err(DecodeError::new(
                offset,
                ErrorKind::NestingTooDeep { max: self.max },
            ));
        }

        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

/// Decodes instructions up to and including the `end` opcode terminating the sequence.
///
/// This is the form of function bodies and of the constant expressions initializing
/// globals and positioning element and data segments. The `end` opcode is consumed
/// but not part of the result.
pub fn decode_expr(cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Expr, DecodeError> {
    decode_expr_nested(cursor, Nesting::new(options))
}

pub(crate) fn decode_expr_nested(
    cursor: &mut Cursor<'_>,
    nesting: Nesting,
) -> Result<Expr, DecodeError> {
    match parse_sequence(cursor, nesting)? {
        (body, None) => Ok(body),
        (_, Some(else_offset)) => Err(DecodeError::new(else_offset, ErrorKind::UnexpectedElse)),
    }
}

/// Accumulates instructions until `end` or `else`. In the latter case the offset of the
/// `else` opcode is returned alongside the instructions, for the caller to decide whether
/// an `else` is allowed there.
fn parse_sequence(
    cursor: &mut Cursor<'_>,
    nesting: Nesting,
) -> Result<(Expr, Option<usize>), DecodeError> {
    let mut body = Vec::new();

    loop {
        match Instruction::parse(cursor)? {
            ParseResult::Instruction(ins) => body.push(ins),
            ParseResult::BlockStart { opcode, offset } => {
                let block = Block::parse(cursor, opcode, nesting.enter(offset)?)?;
                body.push(Instruction::Block(block));
            }
            ParseResult::End => return Ok((body, None)),
            ParseResult::Else(offset) => return Ok((body, Some(offset))),
        }
    }
}

pub(crate) enum ParseResult {
    Instruction(Instruction),
    /// The opcode of `block`, `loop` or `if`, with its offset. The block itself is
    /// decoded by [parse_sequence], so that recursion only goes through small frames.
    BlockStart { opcode: u8, offset: usize },
    End,
    /// The `else` delimiter, with its offset.
    Else(usize),
}

impl Instruction {
    pub(crate) fn parse(cursor: &mut Cursor<'_>) -> Result<ParseResult, DecodeError> {
        let offset = cursor.position();
        let opcode = cursor.read_byte()?;

        let ins = match opcode {
            END => return Ok(ParseResult::End),
            ELSE => return Ok(ParseResult::Else(offset)),

            // --- Control instructions ---
            0x00 => Instruction::Control(ControlOp::Unreachable),
            0x01 => Instruction::Control(ControlOp::Nop),
            0x0F => Instruction::Control(ControlOp::Return),
            0x02..=0x04 => return Ok(ParseResult::BlockStart { opcode, offset }),
            0x0C => Instruction::Branch(BranchOp::Br, LabelIdx::decode(cursor)?),
            0x0D => Instruction::Branch(BranchOp::BrIf, LabelIdx::decode(cursor)?),
            0x0E => {
                let labels = decode_vector(cursor, LabelIdx::decode)?;
                let default = LabelIdx::decode(cursor)?;
                Instruction::BrTable { labels, default }
            }
            0x10 => Instruction::Call(FuncIdx::decode(cursor)?),
            0x11 => {
                let y = TypeIdx::decode(cursor)?;
                // table index, always 0
                expect_reserved_byte(cursor)?;
                Instruction::CallIndirect(y)
            }

            // --- Parametric instructions ---
            0x1A => Instruction::Parametric(ParametricOp::Drop),
            0x1B => Instruction::Parametric(ParametricOp::Select),

            // --- Variable instructions ---
            0x20 => Instruction::Local(LocalOp::Get, LocalIdx::decode(cursor)?),
            0x21 => Instruction::Local(LocalOp::Set, LocalIdx::decode(cursor)?),
            0x22 => Instruction::Local(LocalOp::Tee, LocalIdx::decode(cursor)?),
            0x23 => Instruction::Global(GlobalOp::Get, GlobalIdx::decode(cursor)?),
            0x24 => Instruction::Global(GlobalOp::Set, GlobalIdx::decode(cursor)?),

            // --- Memory instructions ---
            // loads and stores are looked up in MEMORY_OPS below
            0x3F => {
                expect_reserved_byte(cursor)?;
                Instruction::MemorySize(MemorySizeOp::Size)
            }
            0x40 => {
                expect_reserved_byte(cursor)?;
                Instruction::MemorySize(MemorySizeOp::Grow)
            }

            // --- Numeric instructions ---
            0x41 => Instruction::Const(Const::I32(decode_i32(cursor)?)),
            0x42 => Instruction::Const(Const::I64(decode_i64(cursor)?)),
            0x43 => Instruction::Const(Const::F32(decode_f32(cursor)?)),
            0x44 => Instruction::Const(Const::F64(decode_f64(cursor)?)),

            _ => {
                if let Some(op) = MEMORY_OPS.get(&opcode) {
                    Instruction::Memory(*op, Memarg::decode(cursor)?)
                } else if let Some(op) = NUMERIC_OPS.get(&opcode) {
                    Instruction::Numeric(*op)
                } else if let Some(name) = UNSUPPORTED_OPCODES.get(&opcode) {
                    return Err(DecodeError::new(
                        offset,
                        ErrorKind::UnsupportedConstruct(*name),
                    ));
                } else {
                    return Err(DecodeError::new(offset, ErrorKind::InvalidOpcode(opcode)));
                }
            }
        };

        Ok(ParseResult::Instruction(ins))
    }
}

impl Block {
    /// Decodes the block type and nested instructions of `block` (0x02), `loop` (0x03)
    /// or `if` (0x04). `nesting` is the depth of the block's own body.
    fn parse(cursor: &mut Cursor<'_>, opcode: u8, nesting: Nesting) -> Result<Self, DecodeError> {
        let kind = match opcode {
            0x02 => BlockKind::Block,
            0x03 => BlockKind::Loop,
            _ => BlockKind::If,
        };
        let block_type = BlockType::decode(cursor)?;

        let (body, else_offset) = parse_sequence(cursor, nesting)?;

        let else_body = match else_offset {
            None => None,
            Some(_) if kind == BlockKind::If => Some(decode_expr_nested(cursor, nesting)?),
            Some(offset) => return Err(DecodeError::new(offset, ErrorKind::UnexpectedElse)),
        };

        Ok(Block {
            kind,
            block_type,
            body,
            else_body,
        })
    }
}

impl BlockType {
    const EMPTY: u8 = 0x40;

    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let b = cursor.peek()?;
        if b == Self::EMPTY {
            cursor.advance(1)?;
            return Ok(BlockType::Empty);
        }
        if ValType::is_marker(b) {
            return Ok(BlockType::Value(ValType::decode(cursor)?));
        }

        // Anything else is a type index, encoded as a positive s33 so it can't be
        // confused with the single-byte forms above.
        let offset = cursor.position();
        let idx = decode_s33(cursor)?;
        u32::try_from(idx)
            .map(|idx| BlockType::Index(TypeIdx(idx)))
            .map_err(|_| DecodeError::new(offset, ErrorKind::InvalidBlockType(idx)))
    }
}

impl Memarg {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Memarg, DecodeError> {
        let align = decode_u32(cursor)?;
        let offset = decode_u32(cursor)?;
        Ok(Memarg { align, offset })
    }
}

fn expect_reserved_byte(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
    let offset = cursor.position();
    match cursor.read_byte()? {
        0x00 => Ok(()),
        b => Err(DecodeError::new(offset, ErrorKind::InvalidReservedByte(b))),
    }
}
