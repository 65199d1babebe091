use super::Limits;

/// Memory types classify linear memories and their size range. The limits are given in
/// units of page size.
///
/// <https://www.w3.org/TR/wasm-core-1/#memory-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-memtype>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemType {
    pub limits: Limits,
}
