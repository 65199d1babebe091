use super::ResultType;

/// Function types classify the signature of functions, mapping a vector of parameters to a vector
/// of results.
///
/// <https://www.w3.org/TR/wasm-core-1/#function-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-functype>
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FuncType {
    pub parameters: ResultType,
    pub results: ResultType,
}
