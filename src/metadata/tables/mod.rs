//! Metadata tables of the `#~` stream.
//!
//! One submodule per supported table, each with a named `*Raw` row struct and its
//! [`RowReadable`] and [`RowWritable`] layout, plus the shared infrastructure in [`types`]:
//! table identifiers, coded indices and the column width calculation.
//!
//! Columns keep their encoded form. Heap columns are offsets into the heaps of the image,
//! simple index columns are one-based row indices, and coded index columns are decoded into
//! [`CodedIndex`] values.
//!
//! # Reference
//! * [ECMA-335 Partition II, Section 22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata Tables

mod assembly;
mod assemblyref;
mod classlayout;
mod constant;
mod customattribute;
mod declsecurity;
mod event;
mod eventmap;
mod exportedtype;
mod field;
mod fieldlayout;
mod fieldmarshal;
mod fieldrva;
mod file;
mod genericparam;
mod genericparamconstraint;
mod implmap;
mod interfaceimpl;
mod manifestresource;
mod memberref;
mod methoddef;
mod methodimpl;
mod methodsemantics;
mod methodspec;
mod module;
mod moduleref;
mod nestedclass;
mod param;
mod property;
mod propertymap;
mod standalonesig;
mod typedef;
mod typeref;
pub mod types;
mod typespec;

pub use assembly::*;
pub use assemblyref::*;
pub use classlayout::*;
pub use constant::*;
pub use customattribute::*;
pub use declsecurity::*;
pub use event::*;
pub use eventmap::*;
pub use exportedtype::*;
pub use field::*;
pub use fieldlayout::*;
pub use fieldmarshal::*;
pub use fieldrva::*;
pub use file::*;
pub use genericparam::*;
pub use genericparamconstraint::*;
pub use implmap::*;
pub use interfaceimpl::*;
pub use manifestresource::*;
pub use memberref::*;
pub use methoddef::*;
pub use methodimpl::*;
pub use methodsemantics::*;
pub use methodspec::*;
pub use module::*;
pub use moduleref::*;
pub use nestedclass::*;
pub use param::*;
pub use property::*;
pub use propertymap::*;
pub use standalonesig::*;
pub use typedef::*;
pub use typeref::*;
pub use types::*;
pub use typespec::*;
