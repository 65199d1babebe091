//! Decoders for the type constructs shared by several sections.
pub mod functype;
pub mod globaltype;
pub mod limits;
pub mod memtype;
pub mod resulttype;
pub mod tabletype;
pub mod valtype;
