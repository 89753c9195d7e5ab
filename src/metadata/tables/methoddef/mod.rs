//! MethodDef table support.
//!
//! The MethodDef table (ID 0x06) defines every method of the module. Like fields, methods are
//! owned in contiguous runs by the `TypeDef` rows, and own a run of `Param` rows themselves
//! through `param_list`.
//!
//! The `rva` column points at the method body inside the PE image; decoding the body is outside
//! the scope of this crate.
//!
//! See ECMA-335, Partition II, Section 22.26.

mod raw;
mod reader;
mod writer;

pub use raw::*;
