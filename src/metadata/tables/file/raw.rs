use crate::metadata::token::Token;

/// A row of the `File` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `FileAttributes` bitmask
    pub flags: u32,
    /// File name, `#Strings` index
    pub name: u32,
    /// Hash of the file, `#Blob` index
    pub hash_value: u32,
}
