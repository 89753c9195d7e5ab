use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `ManifestResource` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManifestResourceRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Offset of the resource in the resources directory
    pub offset_field: u32,
    /// `ManifestResourceAttributes` bitmask
    pub flags: u32,
    /// Resource name, `#Strings` index
    pub name: u32,
    /// File or assembly holding the resource, null for embedded resources
    pub implementation: CodedIndex,
}
