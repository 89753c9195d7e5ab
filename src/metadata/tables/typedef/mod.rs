//! TypeDef table support.
//!
//! The TypeDef table (ID 0x02) defines every type of the module. Row 1 is the pseudo type
//! `<Module>` holding global fields and methods.
//!
//! ## Table Structure
//!
//! - **Flags** (4 bytes): `TypeAttributes`
//! - **TypeName**, **TypeNamespace** (`#Strings` index)
//! - **Extends** (`TypeDefOrRef` coded index): base type, null for interfaces
//! - **FieldList** (`Field` index): first field owned by the type
//! - **MethodList** (`MethodDef` index): first method owned by the type
//!
//! ## Member Ranges
//!
//! A type owns the contiguous run of rows starting at its list column and ending before the list
//! column of the next type. The last type's run ends at the end of the table. A list column equal
//! to the row count plus one marks an empty run:
//!
//! ```text
//! // Type A owns fields [A.field_list .. B.field_list)
//! // Type A owns methods [A.method_list .. B.method_list)
//! ```
//!
//! ## ECMA-335 Reference
//!
//! See ECMA-335, Partition II, Section 22.37.

mod raw;
mod reader;
mod writer;

pub use raw::*;
