//! WebAssembly instructions.
//!
//! Instructions are grouped by the shape of their immediates: every variant of
//! [`Instruction`] carries exactly the operands its opcode class needs, and the
//! concrete opcode within a class is identified by a small `*Op` enum.
//!
//! <https://www.w3.org/TR/wasm-core-1/#instructions%E2%91%A0>
use super::indices::{FuncIdx, GlobalIdx, LabelIdx, LocalIdx, TypeIdx};
use super::types::ValType;

/// A decoded instruction sequence, such as a function body or a constant expression.
///
/// The `end` opcode terminating the sequence in the binary is not part of it.
pub type Expr = Vec<Instruction>;

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `unreachable`, `nop` and `return`.
    Control(ControlOp),

    /// `block`, `loop` and `if`, owning their nested instruction sequences.
    Block(Block),

    /// `br l` and `br_if l`.
    Branch(BranchOp, LabelIdx),

    /// `br_table l* l_default`.
    BrTable {
        labels: Vec<LabelIdx>,
        default: LabelIdx,
    },

    Call(FuncIdx),

    /// `call_indirect` through table 0, checked against the given type.
    CallIndirect(TypeIdx),

    /// `drop` and `select`.
    Parametric(ParametricOp),

    Local(LocalOp, LocalIdx),
    Global(GlobalOp, GlobalIdx),

    /// Loads and stores.
    Memory(MemoryOp, Memarg),

    /// `memory.size` and `memory.grow`, both operating on memory 0.
    MemorySize(MemorySizeOp),

    Const(Const),

    /// Every numeric operator that takes no immediate.
    Numeric(NumericOp),
}

/// A structured control instruction.
///
/// `body` holds the instructions of a `block` or `loop`, or the `then` arm of an `if`.
/// `else_body` is only ever set for an `if` that has an explicit `else` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub block_type: BlockType,
    pub body: Expr,
    pub else_body: Option<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Block,
    Loop,
    If,
}

/// The type of a structured instruction: either empty, a single result value, or a
/// reference to a function type describing both parameters and results.
///
/// <https://www.w3.org/TR/wasm-core-1/#binary-blocktype>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Empty,
    Value(ValType),
    Index(TypeIdx),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOp {
    Unreachable,
    Nop,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOp {
    Br,
    BrIf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParametricOp {
    Drop,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOp {
    Get,
    Set,
    Tee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalOp {
    Get,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySizeOp {
    Size,
    Grow,
}

/// The immediate of a load or store.
///
/// `align` is the base-2 logarithm of the expected alignment; it is decoded as is and
/// not checked against the width of the access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memarg {
    pub align: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    I32Load,
    I64Load,
    F32Load,
    F64Load,
    I32Load8S,
    I32Load8U,
    I32Load16S,
    I32Load16U,
    I64Load8S,
    I64Load8U,
    I64Load16S,
    I64Load16U,
    I64Load32S,
    I64Load32U,
    I32Store,
    I64Store,
    F32Store,
    F64Store,
    I32Store8,
    I32Store16,
    I64Store8,
    I64Store16,
    I64Store32,
}

/// The immediate of a `*.const` instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Const {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOp {
    I32Eqz,
    I32Eq,
    I32Ne,
    I32LtS,
    I32LtU,
    I32GtS,
    I32GtU,
    I32LeS,
    I32LeU,
    I32GeS,
    I32GeU,

    I64Eqz,
    I64Eq,
    I64Ne,
    I64LtS,
    I64LtU,
    I64GtS,
    I64GtU,
    I64LeS,
    I64LeU,
    I64GeS,
    I64GeU,

    F32Eq,
    F32Ne,
    F32Lt,
    F32Gt,
    F32Le,
    F32Ge,

    F64Eq,
    F64Ne,
    F64Lt,
    F64Gt,
    F64Le,
    F64Ge,

    I32Clz,
    I32Ctz,
    I32Popcnt,
    I32Add,
    I32Sub,
    I32Mul,
    I32DivS,
    I32DivU,
    I32RemS,
    I32RemU,
    I32And,
    I32Or,
    I32Xor,
    I32Shl,
    I32ShrS,
    I32ShrU,
    I32Rotl,
    I32Rotr,

    I64Clz,
    I64Ctz,
    I64Popcnt,
    I64Add,
    I64Sub,
    I64Mul,
    I64DivS,
    I64DivU,
    I64RemS,
    I64RemU,
    I64And,
    I64Or,
    I64Xor,
    I64Shl,
    I64ShrS,
    I64ShrU,
    I64Rotl,
    I64Rotr,

    F32Abs,
    F32Neg,
    F32Ceil,
    F32Floor,
    F32Trunc,
    F32Nearest,
    F32Sqrt,
    F32Add,
    F32Sub,
    F32Mul,
    F32Div,
    F32Min,
    F32Max,
    F32Copysign,

    F64Abs,
    F64Neg,
    F64Ceil,
    F64Floor,
    F64Trunc,
    F64Nearest,
    F64Sqrt,
    F64Add,
    F64Sub,
    F64Mul,
    F64Div,
    F64Min,
    F64Max,
    F64Copysign,

    I32WrapI64,
    I32TruncF32S,
    I32TruncF32U,
    I32TruncF64S,
    I32TruncF64U,
    I64ExtendI32S,
    I64ExtendI32U,
    I64TruncF32S,
    I64TruncF32U,
    I64TruncF64S,
    I64TruncF64U,
    F32ConvertI32S,
    F32ConvertI32U,
    F32ConvertI64S,
    F32ConvertI64U,
    F32DemoteF64,
    F64ConvertI32S,
    F64ConvertI32U,
    F64ConvertI64S,
    F64ConvertI64U,
    F64PromoteF32,
    I32ReinterpretF32,
    I64ReinterpretF64,
    F32ReinterpretI32,
    F64ReinterpretI64,

    I32Extend8S,
    I32Extend16S,
    I64Extend8S,
    I64Extend16S,
    I64Extend32S,
}
