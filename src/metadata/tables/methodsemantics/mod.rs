//! MethodSemantics table (ID 0x18): binds accessor methods (getters, setters, add/remove/raise
//! and other methods) to their event or property. Sorted by `association`.

mod raw;
mod reader;
mod writer;

pub use raw::*;
