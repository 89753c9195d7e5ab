use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, ImplMapRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for ImplMapRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* mapping_flags    */ 2 +
            /* member_forwarded */ sizes.coded_index_bytes(CodedIndexType::MemberForwarded) +
            /* import_name      */ sizes.str_bytes() +
            /* import_scope     */ sizes.table_index_bytes(TableId::ModuleRef)
        )
    }

    /// Decode one `ImplMap` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::ImplMap, rid)?;

        Ok(ImplMapRaw {
            rid,
            token,
            offset,
            mapping_flags: cursor.short()?,
            member_forwarded: cursor.coded(CodedIndexType::MemberForwarded)?,
            import_name: cursor.string()?,
            import_scope: cursor.index(TableId::ModuleRef)?,
        })
    }
}
