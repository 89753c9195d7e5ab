use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `MemberRef` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberRefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Type or module the member belongs to
    pub class: CodedIndex,
    /// Member name, `#Strings` index
    pub name: u32,
    /// Member signature, `#Blob` index
    pub signature: u32,
}
