use crate::metadata::token::Token;

/// A row of the `FieldRVA` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldRvaRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// RVA of the initial value
    pub rva: u32,
    /// The initialized field
    pub field: u32,
}
