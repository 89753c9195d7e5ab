//! Property table (ID 0x17).

mod raw;
mod reader;
mod writer;

pub use raw::*;
