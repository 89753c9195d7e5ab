use crate::{
    metadata::tables::{types::RowCursor, ModuleRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for ModuleRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* generation */ 2 +
            /* name       */ sizes.str_bytes() +
            /* mvid       */ sizes.guid_bytes() +
            /* encid      */ sizes.guid_bytes() +
            /* encbaseid  */ sizes.guid_bytes()
        )
    }

    /// Decode one `Module` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::Module, rid)?;

        Ok(ModuleRaw {
            rid,
            token,
            offset,
            generation: cursor.short()?,
            name: cursor.string()?,
            mvid: cursor.guid()?,
            encid: cursor.guid()?,
            encbaseid: cursor.guid()?,
        })
    }
}
