//! MethodSpec table (ID 0x2B): instantiations of generic methods.

mod raw;
mod reader;
mod writer;

pub use raw::*;
