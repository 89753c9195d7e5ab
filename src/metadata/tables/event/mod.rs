//! Event table (ID 0x14).

mod raw;
mod reader;
mod writer;

pub use raw::*;
