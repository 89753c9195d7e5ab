//! TypeRef table (ID 0x01): references to types defined in other modules or assemblies.
//!
//! The `resolution_scope` coded index names where the type is found: a `Module` (the current
//! one), a `ModuleRef`, an `AssemblyRef`, or an enclosing `TypeRef` for nested types.

mod raw;
mod reader;
mod writer;

pub use raw::*;
