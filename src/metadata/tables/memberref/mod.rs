//! MemberRef table (ID 0x0A): references to fields and methods, either of other modules or of
//! generic instantiations (through a `TypeSpec` parent).
//!
//! See ECMA-335, Partition II, Section 22.25.

mod raw;
mod reader;
mod writer;

pub use raw::*;
