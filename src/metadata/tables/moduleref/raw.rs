use crate::metadata::token::Token;

/// A row of the `ModuleRef` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleRefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Module name, `#Strings` index
    pub name: u32,
}
