use crate::{
    metadata::tables::{types::RowCursor, ModuleRefRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for ModuleRefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* name */ sizes.str_bytes()
        )
    }

    /// Decode one `ModuleRef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::ModuleRef, rid)?;

        Ok(ModuleRefRaw {
            rid,
            token,
            offset,
            name: cursor.string()?,
        })
    }
}
