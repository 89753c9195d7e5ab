//! FieldMarshal table (ID 0x0D): native marshalling descriptors of fields and parameters.
//! Sorted by `parent`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
