//! NestedClass table (ID 0x29). Sorted by `nested_class`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
