use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `ExportedType` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportedTypeRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// `TypeAttributes` bitmask
    pub flags: u32,
    /// Hint: `TypeDef` row of the type in the defining module
    pub type_def_id: u32,
    /// Type name, `#Strings` index
    pub name: u32,
    /// Namespace, `#Strings` index
    pub namespace: u32,
    /// File, assembly or enclosing exported type defining the type
    pub implementation: CodedIndex,
}
