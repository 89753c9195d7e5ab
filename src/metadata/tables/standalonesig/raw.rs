use crate::metadata::token::Token;

/// A row of the `StandAloneSig` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandAloneSigRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Signature, `#Blob` index
    pub signature: u32,
}
