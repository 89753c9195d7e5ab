use crate::metadata::token::Token;

/// A row of the `PropertyMap` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMapRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Type owning the properties
    pub parent: u32,
    /// First row of the run of properties owned by `parent`
    pub property_list: u32,
}
