//! Constant table (ID 0x0B): compile-time values of fields, parameters and properties.
//!
//! Sorted by `parent`. The value blob holds the constant in the little-endian representation of
//! its element type.

mod raw;
mod reader;
mod writer;

pub use raw::*;
