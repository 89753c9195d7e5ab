use crate::metadata::{tables::CodedIndex, token::Token};

/// A row of the `GenericParamConstraint` table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericParamConstraintRaw {
    /// Row ID (1-based)
    pub rid: u32,
    /// Metadata token of this row
    pub token: Token,
    /// Byte offset of this row within the table data
    pub offset: usize,
    /// The constrained generic parameter
    pub owner: u32,
    /// Type the parameter is constrained to
    pub constraint: CodedIndex,
}
