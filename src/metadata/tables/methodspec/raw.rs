use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `MethodSpec` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodSpecRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// The instantiated generic method
    pub method: CodedIndex,
    /// Instantiation signature, `#Blob` index
    pub instantiation: u32,
}
