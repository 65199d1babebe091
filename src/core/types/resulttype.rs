use super::ValType;

/// Result types classify the result of executing instructions or functions, which is a
/// sequence of values.
///
/// <https://www.w3.org/TR/wasm-core-1/#result-types%E2%91%A0>
pub type ResultType = Vec<ValType>;
