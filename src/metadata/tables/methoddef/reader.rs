use crate::{
    metadata::tables::{types::RowCursor, MethodDefRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for MethodDefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* rva        */ 4 +
            /* impl_flags */ 2 +
            /* flags      */ 2 +
            /* name       */ sizes.str_bytes() +
            /* signature  */ sizes.blob_bytes() +
            /* param_list */ sizes.table_index_bytes(TableId::Param)
        )
    }

    /// Decode one `MethodDef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::MethodDef, rid)?;

        Ok(MethodDefRaw {
            rid,
            token,
            offset,
            rva: cursor.fixed::<u32>()?,
            impl_flags: cursor.short()?,
            flags: cursor.short()?,
            name: cursor.string()?,
            signature: cursor.blob()?,
            param_list: cursor.index(TableId::Param)?,
        })
    }
}
