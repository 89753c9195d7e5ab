//! Coded indices (ECMA-335 II.24.2.6).
//!
//! A coded index is a table reference whose target table is chosen at runtime from a small,
//! fixed list of candidates. The position of the target in that list is stored in the low
//! `tag_bits` bits, the one-based row index in the remaining high bits:
//!
//! ```text
//! value = (rid << tag_bits) | position_of(table)
//! ```
//!
//! The width of the column (2 or 4 bytes) depends on the largest candidate table, see
//! [`crate::metadata::tables::TableInfo::coded_index_bytes`].

use strum::{EnumCount, EnumIter};

use crate::{
    file::io::{read_le_at_dyn, write_le_at_dyn},
    metadata::{
        tables::{TableId, TableInfoRef},
        token::{Token, TOKEN_ROW_MAX},
    },
    utils::bits_for,
    Error, Result,
};

/// The 13 coded index kinds of the metadata tables.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, EnumIter, EnumCount)]
#[repr(usize)]
pub enum CodedIndexType {
    /// `TypeDef`, `TypeRef` or `TypeSpec`
    TypeDefOrRef,
    /// `Field`, `Param` or `Property`
    HasConstant,
    /// Anything a custom attribute can be attached to
    HasCustomAttribute,
    /// `Field` or `Param`
    HasFieldMarshal,
    /// `TypeDef`, `MethodDef` or `Assembly`
    HasDeclSecurity,
    /// Parent of a `MemberRef`
    MemberRefParent,
    /// `Event` or `Property`
    HasSemantics,
    /// `MethodDef` or `MemberRef`
    MethodDefOrRef,
    /// `Field` or `MethodDef`
    MemberForwarded,
    /// `File`, `AssemblyRef` or `ExportedType`
    Implementation,
    /// Constructor of a custom attribute
    CustomAttributeType,
    /// Scope a `TypeRef` is resolved in
    ResolutionScope,
    /// `TypeDef` or `MethodDef`
    TypeOrMethodDef,
}

impl CodedIndexType {
    /// Candidate tables in tag order. `None` marks a reserved, unused tag.
    #[must_use]
    pub fn tables(&self) -> &'static [Option<TableId>] {
        match self {
            CodedIndexType::TypeDefOrRef => &[
                Some(TableId::TypeDef),
                Some(TableId::TypeRef),
                Some(TableId::TypeSpec),
            ],
            CodedIndexType::HasConstant => &[
                Some(TableId::Field),
                Some(TableId::Param),
                Some(TableId::Property),
            ],
            CodedIndexType::HasCustomAttribute => &[
                Some(TableId::MethodDef),
                Some(TableId::Field),
                Some(TableId::TypeRef),
                Some(TableId::TypeDef),
                Some(TableId::Param),
                Some(TableId::InterfaceImpl),
                Some(TableId::MemberRef),
                Some(TableId::Module),
                // Listed as 'Permission' in the standard, no such table exists
                Some(TableId::DeclSecurity),
                Some(TableId::Property),
                Some(TableId::Event),
                Some(TableId::StandAloneSig),
                Some(TableId::ModuleRef),
                Some(TableId::TypeSpec),
                Some(TableId::Assembly),
                Some(TableId::AssemblyRef),
                Some(TableId::File),
                Some(TableId::ExportedType),
                Some(TableId::ManifestResource),
                Some(TableId::GenericParam),
                Some(TableId::GenericParamConstraint),
                Some(TableId::MethodSpec),
            ],
            CodedIndexType::HasFieldMarshal => &[Some(TableId::Field), Some(TableId::Param)],
            CodedIndexType::HasDeclSecurity => &[
                Some(TableId::TypeDef),
                Some(TableId::MethodDef),
                Some(TableId::Assembly),
            ],
            CodedIndexType::MemberRefParent => &[
                Some(TableId::TypeDef),
                Some(TableId::TypeRef),
                Some(TableId::ModuleRef),
                Some(TableId::MethodDef),
                Some(TableId::TypeSpec),
            ],
            CodedIndexType::HasSemantics => &[Some(TableId::Event), Some(TableId::Property)],
            CodedIndexType::MethodDefOrRef => &[Some(TableId::MethodDef), Some(TableId::MemberRef)],
            CodedIndexType::MemberForwarded => &[Some(TableId::Field), Some(TableId::MethodDef)],
            CodedIndexType::Implementation => &[
                Some(TableId::File),
                Some(TableId::AssemblyRef),
                Some(TableId::ExportedType),
            ],
            CodedIndexType::CustomAttributeType => &[
                None,
                None,
                Some(TableId::MethodDef),
                Some(TableId::MemberRef),
                None,
            ],
            CodedIndexType::ResolutionScope => &[
                Some(TableId::Module),
                Some(TableId::ModuleRef),
                Some(TableId::AssemblyRef),
                Some(TableId::TypeRef),
            ],
            CodedIndexType::TypeOrMethodDef => &[Some(TableId::TypeDef), Some(TableId::MethodDef)],
        }
    }

    /// Number of low bits that hold the tag, `ceil(log2(tables().len()))`.
    #[must_use]
    pub fn tag_bits(&self) -> u8 {
        bits_for(self.tables().len())
    }

    /// Candidate tables that can actually be referenced.
    pub fn candidates(&self) -> impl Iterator<Item = TableId> {
        self.tables().iter().filter_map(|table| *table)
    }

    /// Encode a reference to row `rid` (one-based) of `table`.
    ///
    /// A null reference (`rid == 0`) encodes as 0 for every kind.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if `table` is not a candidate of this kind, and
    /// [`Error::IntegerRange`] if `rid` does not fit next to the tag.
    pub fn encode(&self, table: TableId, rid: u32) -> Result<u32> {
        if rid == 0 {
            return Ok(0);
        }

        let Some(position) = self
            .tables()
            .iter()
            .position(|candidate| *candidate == Some(table))
        else {
            return Err(Error::InvalidCodedIndex {
                kind: *self,
                value: (u32::from(table as u8) << 24) | (rid & TOKEN_ROW_MAX),
            });
        };

        let bits = self.tag_bits();
        if rid > (u32::MAX >> bits) {
            return Err(Error::IntegerRange(i64::from(rid)));
        }

        #[allow(clippy::cast_possible_truncation)]
        let tag = position as u32;
        Ok((rid << bits) | tag)
    }

    /// Decode a raw coded index into the target table and the one-based row index.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if the tag selects an unused or out-of-range slot.
    pub fn decode(&self, value: u32) -> Result<(TableId, u32)> {
        let bits = self.tag_bits();
        let tag = value & ((1u32 << bits) - 1);

        match self.tables().get(tag as usize) {
            Some(Some(table)) => Ok((*table, value >> bits)),
            // null is written as 0 even where tag 0 is reserved
            _ if value == 0 => Ok((TableId::Module, 0)),
            _ => Err(Error::InvalidCodedIndex { kind: *self, value }),
        }
    }
}

/// A decoded coded index column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodedIndex {
    /// The referenced table
    pub tag: TableId,
    /// The one-based row index, 0 for null
    pub row: u32,
    /// The token of the referenced row
    pub token: Token,
}

impl CodedIndex {
    /// Create a new `CodedIndex`.
    #[must_use]
    pub fn new(tag: TableId, row: u32) -> CodedIndex {
        CodedIndex {
            tag,
            row,
            token: Token::new((u32::from(tag as u8) << 24) | (row & TOKEN_ROW_MAX)),
        }
    }

    /// A null reference; encodes as 0 for every coded index kind.
    #[must_use]
    pub fn null() -> CodedIndex {
        CodedIndex::new(TableId::Module, 0)
    }

    /// Returns true if this index references no row.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row == 0
    }

    /// The referenced table and the zero-based row index.
    ///
    /// # Errors
    /// Returns [`Error::NullIndex`] for a null reference.
    pub fn zero_based(&self) -> Result<(TableId, u32)> {
        if self.row == 0 {
            return Err(Error::NullIndex(format!(
                "coded index into {:?} has no zero-based row",
                self.tag
            )));
        }

        Ok((self.tag, self.row - 1))
    }

    /// The encoded value of this index as a coded index of kind `ci_type`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if the target table is not a candidate of `ci_type`.
    pub fn encode(&self, ci_type: CodedIndexType) -> Result<u32> {
        ci_type.encode(self.tag, self.row)
    }

    /// Read a coded index column of kind `ci_type`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] on truncated data and [`Error::InvalidCodedIndex`] if the
    /// tag selects no table.
    pub fn read(
        data: &[u8],
        offset: &mut usize,
        info: &TableInfoRef,
        ci_type: CodedIndexType,
    ) -> Result<Self> {
        let value = read_le_at_dyn(data, offset, info.coded_index_bytes(ci_type) == 4)?;
        let (tag, row) = ci_type.decode(value)?;
        Ok(CodedIndex::new(tag, row))
    }

    /// Write this index as a column of kind `ci_type`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodedIndex`] if the target table is not a candidate of
    /// `ci_type`, and [`Error::InvalidReference`] if the row lies beyond the target table.
    pub fn write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        info: &TableInfoRef,
        ci_type: CodedIndexType,
    ) -> Result<()> {
        let value = self.encode(ci_type)?;
        if self.row != 0 {
            info.check_row(self.tag, self.row)?;
        }

        write_le_at_dyn(data, offset, value, info.coded_index_bytes(ci_type) == 4)
    }
}

impl Default for CodedIndex {
    fn default() -> Self {
        CodedIndex::null()
    }
}

impl TryFrom<Token> for CodedIndex {
    type Error = Error;

    fn try_from(token: Token) -> Result<Self> {
        let (table, row) = token.decode()?;
        Ok(CodedIndex::new(table, row))
    }
}
