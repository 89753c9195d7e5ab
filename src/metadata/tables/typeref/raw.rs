use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `TypeRef` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeRefRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Scope the type is resolved in
    pub resolution_scope: CodedIndex,
    /// Type name, `#Strings` index
    pub type_name: u32,
    /// Namespace, `#Strings` index
    pub type_namespace: u32,
}
