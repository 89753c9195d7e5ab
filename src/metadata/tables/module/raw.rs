use crate::metadata::token::Token;

/// Raw `Module` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Reserved, always 0
    pub generation: u32,
    /// Module name, `#Strings` index
    pub name: u32,
    /// Module version id, `#GUID` index
    pub mvid: u32,
    /// Edit-and-continue generation id, `#GUID` index, 0 if absent
    pub encid: u32,
    /// Edit-and-continue base generation id, `#GUID` index, 0 if absent
    pub encbaseid: u32,
}
