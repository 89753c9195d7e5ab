//! The Module table (ID 0x00) holds exactly one row describing the module being read or
//! written: its name and its module version id (MVID). The two edit-and-continue GUID columns
//! are 0 in images produced by compilers.
//!
//! ## Table Structure
//!
//! - **Generation** (2 bytes): reserved, 0
//! - **Name** (`#Strings` index)
//! - **Mvid** (`#GUID` index)
//! - **EncId** (`#GUID` index)
//! - **EncBaseId** (`#GUID` index)
//!
//! ## ECMA-335 Reference
//!
//! See ECMA-335, Partition II, Section 22.30.
//!
//! **Table ID**: `0x00`

mod raw;
mod reader;
mod writer;

pub use raw::*;
