use crate::metadata::token::Token;

/// Raw `Assembly` table row.
///
/// Column values are stored as encoded in the table: heap columns are heap offsets, table
/// columns are one-based row indices with 0 as null. Resolving them is left to the caller
/// through the heaps of [`crate::MetadataImage`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssemblyRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `AssemblyHashAlgorithm` of the file hashes
    pub hash_alg_id: u32,
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
    /// Public key, `#Blob` index, 0 if unsigned
    pub public_key: u32,
    /// Assembly name, `#Strings` index
    pub name: u32,
    /// Culture, `#Strings` index, 0 for neutral
    pub culture: u32,
}
