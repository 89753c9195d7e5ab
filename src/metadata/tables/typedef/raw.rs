use crate::metadata::{tables::CodedIndex, token::Token};

/// Raw `TypeDef` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeDefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `TypeAttributes` bitmask
    pub flags: u32,
    /// Type name, `#Strings` index
    pub type_name: u32,
    /// Namespace, `#Strings` index
    pub type_namespace: u32,
    /// Base type, null for interfaces and `System.Object`
    pub extends: CodedIndex,
    /// First row of the run of fields owned by this type
    pub field_list: u32,
    /// First row of the run of methods owned by this type
    pub method_list: u32,
}
