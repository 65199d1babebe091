use super::custom_section::CustomSection;
use super::indices::{FuncIdx, TypeIdx};
use super::segments::{Code, Data, Elem, Export, Global, Import};
use super::types::{FuncType, MemType, TableType};

/// WebAssembly programs are organized into modules, which are the unit of deployment,
/// loading, and compilation. A module collects definitions for types, functions, tables,
/// memories, and globals. In addition, it can declare imports and exports and provide
/// initialization in the form of data and element segments, or a start function.
///
/// Each field holds the decoded payload of the section of the same name. A section that is
/// absent from the binary leaves its field empty, so [`Module::default()`] is the module
/// encoded by the bare preamble.
///
/// <https://www.w3.org/TR/wasm-core-1/#modules%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-module>
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    /// Header of every section encountered, custom ones included, in the order they appear
    /// in the binary.
    pub section_headers: Vec<SectionHeader>,

    /// Custom sections have the id 0. They may appear anywhere and any number of times, so
    /// they are kept in encounter order.
    pub custom_sections: Vec<CustomSection>,

    /// The types component of a module defines a vector of function types. All function
    /// types used in a module must be defined in this component. They are referenced by
    /// type indices.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#type-section%E2%91%A0>
    pub types: Vec<FuncType>,

    /// The imports component of a module defines a set of imports that are required for
    /// instantiation. Every import defines an index in the respective index space. In each
    /// index space, the indices of imports go before the first index of any definition
    /// contained in the module itself.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#import-section%E2%91%A0>
    pub imports: Vec<Import>,

    /// The function section declares the type of every function defined in the module.
    /// Their locals and bodies are found at the same position in [`Self::code`].
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#function-section%E2%91%A0>
    pub functions: Vec<TypeIdx>,

    /// The tables component of a module defines a vector of tables described by their
    /// table type. Most constructs implicitly reference table index 0.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#table-section%E2%91%A0>
    pub tables: Vec<TableType>,

    /// The mems component of a module defines a vector of linear memories as described by
    /// their memory type. The limits are given in units of page size.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#memory-section%E2%91%A0>
    pub mems: Vec<MemType>,

    /// The globals component of a module defines a vector of global variables. Each global
    /// is initialized with an init value given by a constant initializer expression.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#global-section%E2%91%A0>
    pub globals: Vec<Global>,

    /// The exports component of a module defines a set of exports that become accessible
    /// to the host environment once the module has been instantiated.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#export-section%E2%91%A0>
    pub exports: Vec<Export>,

    /// The start component of a module declares the function index of a start function
    /// that is automatically invoked when the module is instantiated.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#start-section%E2%91%A0>
    pub start: Option<FuncIdx>,

    /// Element segments initialize a subrange of a table from a static vector of function
    /// indices, at an offset given by a constant expression.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#element-section%E2%91%A0>
    pub elems: Vec<Elem>,

    /// Locals and bodies of the functions declared in [`Self::functions`].
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#code-section%E2%91%A0>
    pub code: Vec<Code>,

    /// Data segments initialize a range of memory from a static vector of bytes, at an
    /// offset given by a constant expression.
    ///
    /// <https://www.w3.org/TR/wasm-core-1/#data-section%E2%91%A0>
    pub datas: Vec<Data>,
}

impl Module {
    /// Pairs each function declared in the function section with its code entry.
    ///
    /// The decoder guarantees both sections have the same number of entries.
    pub fn funcs(&self) -> impl Iterator<Item = (TypeIdx, &Code)> + '_ {
        self.functions.iter().copied().zip(self.code.iter())
    }
}

/// Each section consists of a one-byte section id, the u32 size of the contents
/// (in bytes), and the actual contents, whose structure is dependent on the section id.
///
/// The header is everything that precedes the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub kind: SectionKind,
    /// Declared payload size in bytes.
    pub size: u32,
    /// Offset of the first payload byte in the decoded buffer.
    pub offset: usize,
}

/// Section kinds, ordered by section id.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum SectionKind {
    Custom,
    Type,
    Import,
    Function,
    Table,
    Memory,
    Global,
    Export,
    Start,
    Element,
    Code,
    Data,
}
