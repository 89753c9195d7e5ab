//! File table (ID 0x26): the other files of a multi-file assembly.

mod raw;
mod reader;
mod writer;

pub use raw::*;
