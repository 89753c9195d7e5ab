use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `MethodSemantics` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MethodSemanticsRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `MethodSemanticsAttributes` bitmask
    pub semantics: u32,
    /// The accessor method
    pub method: u32,
    /// Event or property the accessor belongs to
    pub association: CodedIndex,
}
