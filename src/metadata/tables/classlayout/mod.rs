//! ClassLayout table (ID 0x0F).

mod raw;
mod reader;
mod writer;

pub use raw::*;
