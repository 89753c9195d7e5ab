use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `Constant` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstantRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `ELEMENT_TYPE` of the constant
    pub c_type: u8,
    /// Padding byte, always 0
    pub padding: u8,
    /// Field, parameter or property owning the constant
    pub parent: CodedIndex,
    /// Constant value, `#Blob` index
    pub value: u32,
}
