//! MethodImpl table (ID 0x19): explicit overrides, such as explicit interface implementations.

mod raw;
mod reader;
mod writer;

pub use raw::*;
