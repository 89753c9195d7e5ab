//! ManifestResource table (ID 0x28).

mod raw;
mod reader;
mod writer;

pub use raw::*;
