//! GenericParam table support.
//!
//! The GenericParam table (ID 0x2A) declares the generic parameters of types and methods. The
//! `owner` column is a `TypeOrMethodDef` coded index. Rows are sorted by `owner`, and the
//! parameters of one owner by `number`.
//!
//! ## ECMA-335 Reference
//!
//! See ECMA-335, Partition II, Section 22.20.

mod raw;
mod reader;
mod writer;

pub use raw::*;
