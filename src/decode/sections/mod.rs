//! Decoders for the payload of each section.
//!
//! Every decoder starts at the first payload byte and stops after the last item it
//! decoded. Checking that the payload was consumed exactly is left to the caller,
//! which knows the declared size.
mod code;
mod custom;
mod data;
mod element;
mod export;
mod function;
mod global;
mod import;
mod memory;
mod start;
mod table;
mod r#type;

pub(crate) use code::decode_code_section;
pub(crate) use custom::decode_custom_section;
pub(crate) use data::decode_data_section;
pub(crate) use element::decode_element_section;
pub(crate) use export::decode_export_section;
pub(crate) use function::decode_function_section;
pub(crate) use global::decode_global_section;
pub(crate) use import::decode_import_section;
pub(crate) use memory::decode_memory_section;
pub(crate) use start::decode_start_section;
pub(crate) use table::decode_table_section;
pub(crate) use r#type::decode_type_section;
