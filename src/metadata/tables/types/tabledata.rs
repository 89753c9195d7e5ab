//! Closed union of the decoded tables.
//!
//! [`TableData`] has one variant per supported table, and [`calculate_table_row_size`] one arm
//! per table tag, skipped tables included. Both are matched exhaustively, so a table that is
//! added to [`TableId`] must be handled here before the crate compiles.

use crate::{
    metadata::tables::{
        AssemblyRaw, AssemblyRefRaw, ClassLayoutRaw, ConstantRaw, CustomAttributeRaw,
        DeclSecurityRaw, EventMapRaw, EventRaw, ExportedTypeRaw, FieldLayoutRaw, FieldMarshalRaw,
        FieldRaw, FieldRvaRaw, FileRaw, GenericParamConstraintRaw, GenericParamRaw, ImplMapRaw,
        InterfaceImplRaw, ManifestResourceRaw, MemberRefRaw, MetadataTable, MethodDefRaw,
        MethodImplRaw, MethodSemanticsRaw, MethodSpecRaw, ModuleRaw, ModuleRefRaw,
        NestedClassRaw, ParamRaw, PropertyMapRaw, PropertyRaw, RowReadable, StandAloneSigRaw,
        TableId, TableInfoRef, TypeDefRaw, TypeRefRaw, TypeSpecRaw,
    },
    Result,
};

macro_rules! table_data {
    ($($variant:ident => $raw:ty),* $(,)?) => {
        /// The decoded rows of one supported table.
        pub enum TableData {
            $(
                #[doc = concat!("The `", stringify!($variant), "` table")]
                $variant(MetadataTable<$raw>),
            )*
        }

        impl TableData {
            /// Decode `row_count` rows of `table_id` from `data`.
            ///
            /// Returns `None` for tables whose rows are never interpreted.
            ///
            /// # Errors
            /// Returns an error if the rows are truncated or malformed.
            pub fn read(
                table_id: TableId,
                data: &[u8],
                row_count: u32,
                sizes: &TableInfoRef,
            ) -> Result<Option<TableData>> {
                let table = match table_id {
                    $(
                        TableId::$variant => {
                            TableData::$variant(MetadataTable::new(data, row_count, sizes)?)
                        }
                    )*
                    TableId::FieldPtr
                    | TableId::MethodPtr
                    | TableId::ParamPtr
                    | TableId::EventPtr
                    | TableId::PropertyPtr
                    | TableId::EncLog
                    | TableId::EncMap
                    | TableId::AssemblyProcessor
                    | TableId::AssemblyOS
                    | TableId::AssemblyRefProcessor
                    | TableId::AssemblyRefOS => return Ok(None),
                };

                Ok(Some(table))
            }

            /// The table these rows belong to.
            #[must_use]
            pub fn table_id(&self) -> TableId {
                match self {
                    $(TableData::$variant(_) => TableId::$variant,)*
                }
            }

            /// Number of rows.
            #[must_use]
            pub fn row_count(&self) -> u32 {
                match self {
                    $(TableData::$variant(table) => table.row_count(),)*
                }
            }

            /// Size of one row in bytes.
            #[must_use]
            pub fn row_size(&self) -> u32 {
                match self {
                    $(TableData::$variant(table) => table.row_size(),)*
                }
            }
        }
    };
}

table_data! {
    Module => ModuleRaw,
    TypeRef => TypeRefRaw,
    TypeDef => TypeDefRaw,
    Field => FieldRaw,
    MethodDef => MethodDefRaw,
    Param => ParamRaw,
    InterfaceImpl => InterfaceImplRaw,
    MemberRef => MemberRefRaw,
    Constant => ConstantRaw,
    CustomAttribute => CustomAttributeRaw,
    FieldMarshal => FieldMarshalRaw,
    DeclSecurity => DeclSecurityRaw,
    ClassLayout => ClassLayoutRaw,
    FieldLayout => FieldLayoutRaw,
    StandAloneSig => StandAloneSigRaw,
    EventMap => EventMapRaw,
    Event => EventRaw,
    PropertyMap => PropertyMapRaw,
    Property => PropertyRaw,
    MethodSemantics => MethodSemanticsRaw,
    MethodImpl => MethodImplRaw,
    ModuleRef => ModuleRefRaw,
    TypeSpec => TypeSpecRaw,
    ImplMap => ImplMapRaw,
    FieldRVA => FieldRvaRaw,
    Assembly => AssemblyRaw,
    AssemblyRef => AssemblyRefRaw,
    File => FileRaw,
    ExportedType => ExportedTypeRaw,
    ManifestResource => ManifestResourceRaw,
    NestedClass => NestedClassRaw,
    GenericParam => GenericParamRaw,
    MethodSpec => MethodSpecRaw,
    GenericParamConstraint => GenericParamConstraintRaw,
}

/// Byte size of one row of `table_id` under the column widths of `table_info`.
///
/// Covers every table tag. The skipped tables are never decoded, but their rows still have to
/// be stepped over, so their layouts are spelled out here.
#[must_use]
pub fn calculate_table_row_size(table_id: TableId, table_info: &TableInfoRef) -> u32 {
    match table_id {
        TableId::Module => ModuleRaw::row_size(table_info),
        TableId::TypeRef => TypeRefRaw::row_size(table_info),
        TableId::TypeDef => TypeDefRaw::row_size(table_info),
        TableId::FieldPtr => u32::from(table_info.table_index_bytes(TableId::Field)),
        TableId::Field => FieldRaw::row_size(table_info),
        TableId::MethodPtr => u32::from(table_info.table_index_bytes(TableId::MethodDef)),
        TableId::MethodDef => MethodDefRaw::row_size(table_info),
        TableId::ParamPtr => u32::from(table_info.table_index_bytes(TableId::Param)),
        TableId::Param => ParamRaw::row_size(table_info),
        TableId::InterfaceImpl => InterfaceImplRaw::row_size(table_info),
        TableId::MemberRef => MemberRefRaw::row_size(table_info),
        TableId::Constant => ConstantRaw::row_size(table_info),
        TableId::CustomAttribute => CustomAttributeRaw::row_size(table_info),
        TableId::FieldMarshal => FieldMarshalRaw::row_size(table_info),
        TableId::DeclSecurity => DeclSecurityRaw::row_size(table_info),
        TableId::ClassLayout => ClassLayoutRaw::row_size(table_info),
        TableId::FieldLayout => FieldLayoutRaw::row_size(table_info),
        TableId::StandAloneSig => StandAloneSigRaw::row_size(table_info),
        TableId::EventMap => EventMapRaw::row_size(table_info),
        TableId::EventPtr => u32::from(table_info.table_index_bytes(TableId::Event)),
        TableId::Event => EventRaw::row_size(table_info),
        TableId::PropertyMap => PropertyMapRaw::row_size(table_info),
        TableId::PropertyPtr => u32::from(table_info.table_index_bytes(TableId::Property)),
        TableId::Property => PropertyRaw::row_size(table_info),
        TableId::MethodSemantics => MethodSemanticsRaw::row_size(table_info),
        TableId::MethodImpl => MethodImplRaw::row_size(table_info),
        TableId::ModuleRef => ModuleRefRaw::row_size(table_info),
        TableId::TypeSpec => TypeSpecRaw::row_size(table_info),
        TableId::ImplMap => ImplMapRaw::row_size(table_info),
        TableId::FieldRVA => FieldRvaRaw::row_size(table_info),
        // token + func_code
        TableId::EncLog => 8,
        // token
        TableId::EncMap => 4,
        TableId::Assembly => AssemblyRaw::row_size(table_info),
        // processor
        TableId::AssemblyProcessor => 4,
        // platform, major, minor
        TableId::AssemblyOS => 12,
        TableId::AssemblyRef => AssemblyRefRaw::row_size(table_info),
        TableId::AssemblyRefProcessor => {
            4 + u32::from(table_info.table_index_bytes(TableId::AssemblyRef))
        }
        TableId::AssemblyRefOS => 12 + u32::from(table_info.table_index_bytes(TableId::AssemblyRef)),
        TableId::File => FileRaw::row_size(table_info),
        TableId::ExportedType => ExportedTypeRaw::row_size(table_info),
        TableId::ManifestResource => ManifestResourceRaw::row_size(table_info),
        TableId::NestedClass => NestedClassRaw::row_size(table_info),
        TableId::GenericParam => GenericParamRaw::row_size(table_info),
        TableId::MethodSpec => MethodSpecRaw::row_size(table_info),
        TableId::GenericParamConstraint => GenericParamConstraintRaw::row_size(table_info),
    }
}
