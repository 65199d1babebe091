//! The decoded representation of a WebAssembly module.
//!
//! Everything in here is plain data: the decoder in [`crate::decode`] builds
//! these values once and never mutates them afterwards.
pub mod indices;
pub mod instruction;
pub mod types;

mod custom_section;
mod module;
mod name;
mod segments;

pub use custom_section::CustomSection;
pub use instruction::{Expr, Instruction};
pub use module::{Module, SectionHeader, SectionKind};
pub use name::Name;
pub use segments::{Code, Data, Elem, Export, ExportDesc, Global, Import, ImportDesc, Local};
