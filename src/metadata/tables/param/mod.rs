//! Param table (ID 0x08), the parameters of the `MethodDef` rows.
//!
//! Sequence 0 describes the return value. Parameters without a name, attributes or marshalling
//! information are commonly omitted, so a method may own fewer rows than its signature has
//! parameters.

mod raw;
mod reader;
mod writer;

pub use raw::*;
