use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `ImplMap` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImplMapRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `PInvokeAttributes` bitmask
    pub mapping_flags: u32,
    /// Forwarded field or method
    pub member_forwarded: CodedIndex,
    /// Entry point name, `#Strings` index
    pub import_name: u32,
    /// Native module of the entry point
    pub import_scope: u32,
}
