use super::name::Name;

/// Custom sections are intended to be used for debugging information or
/// third-party extensions, and are ignored by the WebAssembly semantics.
///
/// Their contents consist of a name further identifying the custom section,
/// followed by an uninterpreted sequence of bytes for custom use.
///
/// <https://www.w3.org/TR/wasm-core-1/#custom-section%E2%91%A0>
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSection {
    pub name: Name,
    pub contents: Vec<u8>,
}
