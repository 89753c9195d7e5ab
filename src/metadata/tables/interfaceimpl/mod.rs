//! InterfaceImpl table (ID 0x09). Sorted by `class`, then by `interface`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
