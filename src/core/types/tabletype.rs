use super::Limits;

/// Table types classify tables over elements of function reference type within a size
/// range. The limits are given in numbers of entries.
///
/// The element type is always `funcref`, so it is not stored.
///
/// <https://www.w3.org/TR/wasm-core-1/#table-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-tabletype>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableType {
    pub limits: Limits,
}
