use crate::metadata::{tables::CodedIndex, token::Token};

/// Raw `GenericParam` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericParamRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Position of the parameter, starting at 0
    pub number: u32,
    /// `GenericParamAttributes` bitmask
    pub flags: u32,
    /// Generic type or method declaring the parameter
    pub owner: CodedIndex,
    /// Parameter name, `#Strings` index
    pub name: u32,
}
