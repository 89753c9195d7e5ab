//! AssemblyRef table (ID 0x23): the assemblies this module references.
//!
//! See ECMA-335, Partition II, Section 22.5.

mod raw;
mod reader;
mod writer;

pub use raw::*;
