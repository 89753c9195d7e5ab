use crate::metadata::token::Token;

/// A row of the `NestedClass` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NestedClassRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// The nested type
    pub nested_class: u32,
    /// The enclosing type
    pub enclosing_class: u32,
}
