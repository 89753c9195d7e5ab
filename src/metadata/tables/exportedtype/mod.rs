//! ExportedType table (ID 0x27): types defined in other modules of the assembly, or forwarded to
//! other assemblies.

mod raw;
mod reader;
mod writer;

pub use raw::*;
