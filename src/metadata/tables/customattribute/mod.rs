//! CustomAttribute table support.
//!
//! The CustomAttribute table (ID 0x0C) attaches attributes to nearly every other kind of
//! metadata row. Each row names the element it is attached to (`parent`, a `HasCustomAttribute`
//! coded index), the attribute constructor (`constructor`, a `CustomAttributeType` coded index)
//! and the serialized arguments in the blob heap.
//!
//! ## Ordering
//!
//! The table must be sorted by `parent`. The writer keeps it in order while rows are added, see
//! [`crate::writer::MetadataBuilder::add_sorted_row`].
//!
//! ## Constructor Tags
//!
//! `CustomAttributeType` uses 3 tag bits although only tags 2 (`MethodDef`) and 3 (`MemberRef`)
//! are defined. The other tags are reserved and rejected when decoding.
//!
//! ## ECMA-335 Reference
//!
//! See ECMA-335, Partition II, Section 22.10.
//!
//! **Table ID**: `0x0C`

mod raw;
mod reader;
mod writer;

pub use raw::*;
