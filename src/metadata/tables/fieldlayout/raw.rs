use crate::metadata::token::Token;

/// A row of the `FieldLayout` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldLayoutRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Byte offset of the field
    pub field_offset: u32,
    /// The placed field
    pub field: u32,
}
