use crate::metadata::token::Token;

/// A row of the `TypeSpec` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeSpecRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Type signature, `#Blob` index
    pub signature: u32,
}
