use crate::metadata::token::Token;

/// Raw `MethodDef` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodDefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// RVA of the method body, 0 for abstract and runtime methods
    pub rva: u32,
    /// `MethodImplAttributes` bitmask
    pub impl_flags: u32,
    /// `MethodAttributes` bitmask
    pub flags: u32,
    /// Method name, `#Strings` index
    pub name: u32,
    /// Method signature, `#Blob` index
    pub signature: u32,
    /// First row of the run of parameters owned by this method
    pub param_list: u32,
}
