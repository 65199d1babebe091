//! A decoder for WebAssembly modules in the binary format.
//!
//! This library implements the binary format of [WebAssembly Core 1.0]
//! (the MVP feature set): numeric value types, function tables and a single
//! linear memory. Instructions of later proposals are recognised and reported as
//! [`ErrorKind::UnsupportedConstruct`].
//!
//! The main entry points are [`decode_module()`] for a module already in memory and
//! [`decode_reader()`] for anything implementing [`std::io::Read`].
//!
//! ```
//! let bytes = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
//! let module = wasmdec::decode_module(&bytes).unwrap();
//! assert_eq!(module, wasmdec::Module::default());
//! ```
//!
//! [WebAssembly Core 1.0]: https://www.w3.org/TR/wasm-core-1/
#![forbid(unsafe_code)]

pub mod core;
pub mod decode;

pub use crate::core::{Expr, Instruction, Module, SectionHeader, SectionKind};
pub use crate::decode::{DecodeError, DecodeOptions, ErrorKind};

use std::io::{self, Read};
use thiserror::Error;

/// Decode `input` into a WebAssembly [Module], with the default [DecodeOptions].
pub fn decode_module(input: &[u8]) -> Result<Module, DecodeError> {
    decode_module_with(input, &DecodeOptions::default())
}

/// Decode the module starting at `options.start_offset` in `input`.
///
/// The module extends to the end of `input`. Offsets in errors are relative to the
/// start of `input`, not to the start of the module.
pub fn decode_module_with(input: &[u8], options: &DecodeOptions) -> Result<Module, DecodeError> {
    decode::decode_module(input, options)
}

#[derive(Debug, Error)]
pub enum ReadModuleError {
    #[error("failed reading module")]
    Io(#[from] io::Error),

    #[error("failed decoding module")]
    Decode(#[from] DecodeError),
}

/// Read `input` to the end, then decode it as a WebAssembly [Module].
pub fn decode_reader(input: impl Read) -> Result<Module, ReadModuleError> {
    decode_reader_with(input, &DecodeOptions::default())
}

/// Like [decode_reader()], with explicit [DecodeOptions]. `options.start_offset` counts
/// from the first byte read.
pub fn decode_reader_with(
    mut input: impl Read,
    options: &DecodeOptions,
) -> Result<Module, ReadModuleError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(decode_module_with(&bytes, options)?)
}
