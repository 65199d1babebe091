/// Value types classify the individual values that WebAssembly code can compute with and
/// the values that a variable accepts.
///
/// <https://www.w3.org/TR/wasm-core-1/#value-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-valtype>
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ValType {
    I32,
    I64,
    F32,
    F64,
}
