use crate::metadata::token::Token;

/// A row of the `Property` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `PropertyAttributes` bitmask
    pub flags: u32,
    /// Property name, `#Strings` index
    pub name: u32,
    /// Property signature, `#Blob` index
    pub signature: u32,
}
