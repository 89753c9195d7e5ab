//! The `#~` stream: tables header and the tables that follow it.
//!
//! ```text
//! Offset  Size  Field
//! 0       4     reserved, 0
//! 4       1     major version, 2
//! 5       1     minor version, 0
//! 6       1     heap sizes (bit 0 #Strings, bit 1 #GUID, bit 2 #Blob)
//! 7       1     reserved, 1
//! 8       8     valid mask, one bit per present table
//! 16      8     sorted mask
//! 24      4*n   row count of each present table, in tag order
//! ...           the rows of each present table, in tag order
//! ```
//!
//! # Reference
//! - [ECMA-335 II.24.2.6](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use std::sync::Arc;

use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::{
    file::io::{read_le, read_le_at},
    metadata::tables::{
        calculate_table_row_size, types::impl_table_access, AssemblyRaw, AssemblyRefRaw,
        ClassLayoutRaw, ConstantRaw, CustomAttributeRaw, DeclSecurityRaw, EventMapRaw, EventRaw,
        ExportedTypeRaw, FieldLayoutRaw, FieldMarshalRaw, FieldRaw, FieldRvaRaw, FileRaw,
        GenericParamConstraintRaw, GenericParamRaw, ImplMapRaw, InterfaceImplRaw,
        ManifestResourceRaw, MemberRefRaw, MethodDefRaw, MethodImplRaw, MethodSemanticsRaw,
        MethodSpecRaw, ModuleRaw, ModuleRefRaw, NestedClassRaw, ParamRaw, PropertyMapRaw,
        PropertyRaw, StandAloneSigRaw, TableData, TableId, TableInfo, TableInfoRef, TypeDefRaw,
        TypeRefRaw, TypeSpecRaw,
    },
    Error::OutOfBounds,
    Result,
};

/// Size of the fixed part of the `#~` header.
pub const TABLES_HEADER_SIZE: usize = 24;

/// Value of the `sorted` mask written by compilers and by [`crate::MetadataBuilder`].
pub const SORTED_MASK: u64 = 0x0000_1600_3325_FA00;

/// The parsed `#~` stream.
///
/// Every supported table present in the image is decoded while parsing, the skipped tables are
/// stepped over by their row width. Tables are reached through [`TableAccess`](crate::metadata::tables::TableAccess):
///
/// ```rust,ignore
/// use cilmeta::metadata::tables::{TableAccess, TypeDefRaw};
///
/// if let Some(types) = TableAccess::<TypeDefRaw>::table(&header) {
///     for row in types {
///         println!("{:08X} {}", row.flags, row.type_name);
///     }
/// }
/// ```
pub struct TablesHeader {
    /// Major version of the table schema
    pub major_version: u8,
    /// Minor version of the table schema
    pub minor_version: u8,
    /// Bit vector of present tables
    pub valid: u64,
    /// Bit vector of sorted tables
    pub sorted: u64,
    /// Row counts and column widths of this image
    pub info: TableInfoRef,
    tables: Vec<Option<TableData>>,
}

/// Row count of one present table, see [`TablesHeader::table_summaries`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSummary {
    /// The table
    pub table_id: TableId,
    /// Its number of rows
    pub row_count: u32,
}

impl TablesHeader {
    /// Parse the `#~` stream.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the header, the row counts or any table run
    /// past the stream, [`crate::Error::UnknownTable`] if the valid mask names a table without a
    /// known layout, and any row decoding error.
    pub fn from(data: &[u8]) -> Result<TablesHeader> {
        if data.len() < TABLES_HEADER_SIZE {
            return Err(OutOfBounds);
        }

        let valid = read_le::<u64>(&data[8..])?;
        let info = Arc::new(TableInfo::new(data, valid)?);

        let mut offset = TABLES_HEADER_SIZE + valid.count_ones() as usize * 4;
        let mut tables: Vec<Option<TableData>> = TableId::iter().map(|_| None).collect();

        for table_id in TableId::iter() {
            if valid & table_id.mask() == 0 {
                continue;
            }

            let rows = info.get(table_id).rows;
            let size = (rows as usize)
                .checked_mul(calculate_table_row_size(table_id, &info) as usize)
                .ok_or(OutOfBounds)?;
            let Some(table_bytes) = offset
                .checked_add(size)
                .and_then(|end| data.get(offset..end))
            else {
                return Err(OutOfBounds);
            };

            if table_id.is_skipped() {
                trace!(?table_id, rows, "skipping table");
            } else {
                trace!(?table_id, rows, offset, "decoding table");
                tables[table_id as usize] = TableData::read(table_id, table_bytes, rows, &info)?;
            }

            offset += size;
        }

        let mut header_offset = 16;
        let sorted = read_le_at::<u64>(data, &mut header_offset)?;

        debug!(
            valid,
            sorted,
            tables = valid.count_ones(),
            size = offset,
            "parsed tables header"
        );

        Ok(TablesHeader {
            major_version: read_le::<u8>(&data[4..])?,
            minor_version: read_le::<u8>(&data[5..])?,
            valid,
            sorted,
            info,
            tables,
        })
    }

    /// Number of tables present in the valid mask, skipped tables included.
    #[must_use]
    pub fn table_count(&self) -> u32 {
        self.valid.count_ones()
    }

    /// Returns true if `table_id` is present in the valid mask.
    #[must_use]
    pub fn has_table(&self, table_id: TableId) -> bool {
        self.valid & table_id.mask() != 0
    }

    /// Number of rows of `table_id`, 0 when absent.
    #[must_use]
    pub fn row_count(&self, table_id: TableId) -> u32 {
        self.info.get(table_id).rows
    }

    /// The decoded rows of `table_id`, `None` when absent or skipped.
    #[must_use]
    pub fn table_data(&self, table_id: TableId) -> Option<&TableData> {
        self.tables.get(table_id as usize)?.as_ref()
    }

    /// Tables present in the valid mask, in tag order.
    pub fn present_tables(&self) -> impl Iterator<Item = TableId> + '_ {
        TableId::iter().filter(|table_id| self.has_table(*table_id))
    }

    /// Row count of every present table.
    #[must_use]
    pub fn table_summaries(&self) -> Vec<TableSummary> {
        self.present_tables()
            .map(|table_id| TableSummary {
                table_id,
                row_count: self.row_count(table_id),
            })
            .collect()
    }
}

impl_table_access!(
    TablesHeader,
    ModuleRaw => Module,
    TypeRefRaw => TypeRef,
    TypeDefRaw => TypeDef,
    FieldRaw => Field,
    MethodDefRaw => MethodDef,
    ParamRaw => Param,
    InterfaceImplRaw => InterfaceImpl,
    MemberRefRaw => MemberRef,
    ConstantRaw => Constant,
    CustomAttributeRaw => CustomAttribute,
    FieldMarshalRaw => FieldMarshal,
    DeclSecurityRaw => DeclSecurity,
    ClassLayoutRaw => ClassLayout,
    FieldLayoutRaw => FieldLayout,
    StandAloneSigRaw => StandAloneSig,
    EventMapRaw => EventMap,
    EventRaw => Event,
    PropertyMapRaw => PropertyMap,
    PropertyRaw => Property,
    MethodSemanticsRaw => MethodSemantics,
    MethodImplRaw => MethodImpl,
    ModuleRefRaw => ModuleRef,
    TypeSpecRaw => TypeSpec,
    ImplMapRaw => ImplMap,
    FieldRvaRaw => FieldRVA,
    AssemblyRaw => Assembly,
    AssemblyRefRaw => AssemblyRef,
    FileRaw => File,
    ExportedTypeRaw => ExportedType,
    ManifestResourceRaw => ManifestResource,
    NestedClassRaw => NestedClass,
    GenericParamRaw => GenericParam,
    MethodSpecRaw => MethodSpec,
    GenericParamConstraintRaw => GenericParamConstraint,
);
