//! Decoding for WebAssembly indices.
//!
//! See <https://www.w3.org/TR/wasm-core-1/#indices%E2%91%A4>

use crate::core::indices::{FuncIdx, GlobalIdx, LabelIdx, LocalIdx, MemIdx, TableIdx, TypeIdx};
use crate::decode::integer::decode_u32;
use crate::decode::{Cursor, DecodeError};

macro_rules! define_index_decoder {
    ($name:ident) => {
        impl $name {
            pub(crate) fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
                let idx = decode_u32(cursor)?;
                Ok(Self(idx))
            }
        }
    };
}

define_index_decoder!(TypeIdx);
define_index_decoder!(FuncIdx);
define_index_decoder!(TableIdx);
define_index_decoder!(MemIdx);
define_index_decoder!(GlobalIdx);
define_index_decoder!(LocalIdx);
define_index_decoder!(LabelIdx);
