use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `FieldMarshal` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMarshalRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// Marshalled field or parameter
    pub parent: CodedIndex,
    /// Marshalling descriptor, `#Blob` index
    pub native_type: u32,
}
