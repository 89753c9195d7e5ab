//! Field table (ID 0x04). Each row is owned by the `TypeDef` whose `field_list` run contains it.

mod raw;
mod reader;
mod writer;

pub use raw::*;
