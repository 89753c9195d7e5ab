use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `InterfaceImpl` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterfaceImplRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Implementing type
    pub class: u32,
    /// Implemented interface
    pub interface: CodedIndex,
}
