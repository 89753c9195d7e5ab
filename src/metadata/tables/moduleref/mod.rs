//! ModuleRef table (ID 0x1A).

mod raw;
mod reader;
mod writer;

pub use raw::*;
