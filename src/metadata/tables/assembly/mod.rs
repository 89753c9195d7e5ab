//! Assembly table (ID 0x20).
//!
//! At most one row, present in the manifest module of an assembly.

mod raw;
mod reader;
mod writer;

pub use raw::*;
