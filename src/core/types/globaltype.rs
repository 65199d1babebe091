use super::ValType;

/// Global types classify global variables, which hold a value and can either be mutable or
/// immutable.
///
/// <https://www.w3.org/TR/wasm-core-1/#global-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-globaltype>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalType(pub Mut, pub ValType);

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mut {
    Const,
    Var,
}
