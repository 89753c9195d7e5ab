use crate::metadata::{tables::CodedIndex, token::Token};

/// Raw `CustomAttribute` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomAttributeRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Element the attribute is applied to
    pub parent: CodedIndex,
    /// Attribute constructor, a `MethodDef` or `MemberRef`
    pub constructor: CodedIndex,
    /// Attribute arguments, `#Blob` index, 0 for none
    pub value: u32,
}
