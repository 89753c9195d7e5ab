use crate::metadata::token::Token;

/// A row of the `Param` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `ParamAttributes` bitmask
    pub flags: u32,
    /// Position of the parameter, 0 for the return value
    pub sequence: u32,
    /// Parameter name, `#Strings` index
    pub name: u32,
}
