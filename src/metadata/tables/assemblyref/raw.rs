use crate::metadata::token::Token;

/// A row of the `AssemblyRef` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssemblyRefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Major version
    pub major_version: u32,
    /// Minor version
    pub minor_version: u32,
    /// Build number
    pub build_number: u32,
    /// Revision number
    pub revision_number: u32,
    /// `AssemblyFlags` bitmask
    pub flags: u32,
    /// Public key or token, `#Blob` index
    pub public_key_or_token: u32,
    /// Assembly name, `#Strings` index
    pub name: u32,
    /// Culture, `#Strings` index
    pub culture: u32,
    /// Hash of the referenced assembly, `#Blob` index
    pub hash_value: u32,
}
