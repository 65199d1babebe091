//! Entries of the vector-shaped sections.
use super::indices::{FuncIdx, GlobalIdx, MemIdx, TableIdx, TypeIdx};
use super::instruction::Expr;
use super::name::Name;
use super::types::{GlobalType, MemType, TableType, ValType};

/// Each import is labeled by a two-level name space, consisting of a module name and a
/// name for an entity within that module. Importable definitions are functions, tables,
/// memories, and globals.
///
/// <https://www.w3.org/TR/wasm-core-1/#imports%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module: Name,
    pub name: Name,
    pub desc: ImportDesc,
}

/// What kind of external item an import brings in, along with the type it is
/// required to have.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportDesc {
    Func(TypeIdx),
    Table(TableType),
    Mem(MemType),
    Global(GlobalType),
}

/// Each export is labeled by a unique name. Exportable definitions are functions, tables,
/// memories, and globals, which are referenced through a respective descriptor.
///
/// <https://www.w3.org/TR/wasm-core-1/#exports%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub name: Name,
    pub desc: ExportDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDesc {
    Func(FuncIdx),
    Table(TableIdx),
    Mem(MemIdx),
    Global(GlobalIdx),
}

/// A global variable: its type, and the constant expression computing its initial value.
///
/// <https://www.w3.org/TR/wasm-core-1/#globals%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    pub r#type: GlobalType,
    pub init: Expr,
}

/// An element segment copies function indices into `table`, starting at the position
/// computed by `offset`.
///
/// <https://www.w3.org/TR/wasm-core-1/#element-segments%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Elem {
    pub table: TableIdx,
    pub offset: Expr,
    pub init: Vec<FuncIdx>,
}

/// A data segment copies `init` into `memory`, starting at the address computed by
/// `offset`.
///
/// <https://www.w3.org/TR/wasm-core-1/#data-segments%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    pub memory: MemIdx,
    pub offset: Expr,
    pub init: Vec<u8>,
}

/// A code section entry: the locals and body of one function.
///
/// <https://www.w3.org/TR/wasm-core-1/#code-section%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    /// Declared size of the entry in bytes, not counting the size field itself.
    pub size: u32,
    /// Locals in their compressed form, as runs of `count` locals of the same type.
    pub locals: Vec<Local>,
    pub body: Expr,
}

impl Code {
    /// The type of every local, with each run expanded.
    pub fn expanded_locals(&self) -> impl Iterator<Item = ValType> + '_ {
        self.locals
            .iter()
            .flat_map(|local| std::iter::repeat_n(local.t, local.count as usize))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local {
    pub count: u32,
    pub t: ValType,
}
