use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `DeclSecurity` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclSecurityRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `SecurityAction` value
    pub action: u16,
    /// Type, method or assembly the permission set applies to
    pub parent: CodedIndex,
    /// Serialized permission set, `#Blob` index
    pub permission_set: u32,
}
