//! TypeSpec table (ID 0x1B): types described by a signature, such as generic instantiations,
//! arrays and pointers.

mod raw;
mod reader;
mod writer;

pub use raw::*;
