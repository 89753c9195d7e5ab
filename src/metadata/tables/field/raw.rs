use crate::metadata::token::Token;

/// A row of the `Field` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `FieldAttributes` bitmask
    pub flags: u32,
    /// Field name, `#Strings` index
    pub name: u32,
    /// Field signature, `#Blob` index
    pub signature: u32,
}
