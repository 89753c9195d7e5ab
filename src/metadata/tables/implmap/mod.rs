//! ImplMap table (ID 0x1C): P/Invoke mappings of methods to native entry points.
//!
//! Sorted by `member_forwarded`. See ECMA-335, Partition II, Section 22.22.

mod raw;
mod reader;
mod writer;

pub use raw::*;
