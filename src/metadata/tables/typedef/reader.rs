use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, RowReadable, TableId, TableInfoRef, TypeDefRaw,
    },
    Result,
};

impl RowReadable for TypeDefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* flags          */ 4 +
            /* type_name      */ sizes.str_bytes() +
            /* type_namespace */ sizes.str_bytes() +
            /* extends        */ sizes.coded_index_bytes(CodedIndexType::TypeDefOrRef) +
            /* field_list     */ sizes.table_index_bytes(TableId::Field) +
            /* method_list    */ sizes.table_index_bytes(TableId::MethodDef)
        )
    }

    /// Decode one `TypeDef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::TypeDef, rid)?;

        Ok(TypeDefRaw {
            rid,
            token,
            offset,
            flags: cursor.fixed::<u32>()?,
            type_name: cursor.string()?,
            type_namespace: cursor.string()?,
            extends: cursor.coded(CodedIndexType::TypeDefOrRef)?,
            field_list: cursor.index(TableId::Field)?,
            method_list: cursor.index(TableId::MethodDef)?,
        })
    }
}
