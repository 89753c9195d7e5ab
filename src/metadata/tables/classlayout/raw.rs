use crate::metadata::token::Token;

/// A row of the `ClassLayout` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassLayoutRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Field alignment, a power of two up to 128
    pub packing_size: u16,
    /// Size of the type in bytes
    pub class_size: u32,
    /// The laid out type
    pub parent: u32,
}
