//! Helpers for decoding WebAssembly values, types, instructions and sections.
//!
//! Every decoder takes a [`Cursor`] over the whole input buffer and advances it past
//! the bytes it consumed. Failures are reported as a [`DecodeError`] carrying the
//! offset of the offending construct.
mod cursor;
mod error;
pub(crate) mod helpers;
pub mod indices;
pub mod instructions;
pub mod integer;
mod module;
mod options;
mod sections;
pub mod types;

pub use cursor::Cursor;
pub use error::{DecodeError, ErrorKind, IntegerErrorReason, IntegerType};
pub use module::{MAGIC, VERSION, decode_module};
pub use options::{DEFAULT_MAX_NESTING_DEPTH, DecodeOptions};

/// A type whose values are encoded as a single tag byte.
pub(crate) trait FromMarkerByte
where
    Self: Sized + Copy + std::fmt::Debug + 'static,
{
    // defines the mapping between expected bytes and the corresponding value
    fn markers() -> &'static phf::OrderedMap<u8, Self>;

    /// The error reported when `b` is not one of [`Self::markers`].
    fn invalid_marker(b: u8) -> ErrorKind;

    fn markers_formatted() -> String {
        Self::markers()
            .entries()
            .map(|(marker, variant)| format!("{marker:#04X} ({variant:?})"))
            .collect::<Vec<String>>()
            .join(", ")
    }

    fn from_marker(b: u8) -> Result<Self, ErrorKind> {
        match Self::markers().get(&b) {
            Some(n) => Ok(*n),
            None => Err(Self::invalid_marker(b)),
        }
    }

    /// Reads one byte and maps it, reporting an invalid marker at the byte's offset.
    fn read_marker(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let offset = cursor.position();
        let b = cursor.read_byte()?;
        Self::from_marker(b).map_err(|kind| DecodeError::new(offset, kind))
    }
}
