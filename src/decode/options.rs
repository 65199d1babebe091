/// Default bound on how deeply `block`, `loop` and `if` may nest.
///
/// Chosen so that decoding at this depth fits in a 2 MiB thread stack, the default
/// for spawned threads, even in unoptimized builds.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Knobs for [`crate::decode_module_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Position of the module preamble in the buffer. Error offsets stay relative to
    /// the start of the buffer.
    pub start_offset: usize,

    /// Maximum nesting depth of structured instructions. Exceeding it fails with
    /// [`crate::decode::ErrorKind::NestingTooDeep`] instead of growing the stack further.
    pub max_nesting_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            start_offset: 0,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
