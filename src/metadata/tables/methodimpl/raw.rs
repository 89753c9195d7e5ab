use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `MethodImpl` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodImplRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Type containing the override
    pub class: u32,
    /// Implementing method
    pub method_body: CodedIndex,
    /// Overridden method
    pub method_declaration: CodedIndex,
}
