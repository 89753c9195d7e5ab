//! FieldRVA table (ID 0x1D): initial data of static fields. Sorted by `field`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
