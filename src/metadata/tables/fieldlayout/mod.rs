//! FieldLayout table (ID 0x10): explicit field offsets of types with explicit layout.
//! Sorted by `field`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
