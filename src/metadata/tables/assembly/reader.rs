use crate::{
    metadata::tables::{types::RowCursor, AssemblyRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for AssemblyRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* hash_alg_id     */ 4 +
            /* major_version   */ 2 +
            /* minor_version   */ 2 +
            /* build_number    */ 2 +
            /* revision_number */ 2 +
            /* flags           */ 4 +
            /* public_key      */ sizes.blob_bytes() +
            /* name            */ sizes.str_bytes() +
            /* culture         */ sizes.str_bytes()
        )
    }

    /// Decode one `Assembly` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::Assembly, rid)?;

        Ok(AssemblyRaw {
            rid,
            token,
            offset,
            hash_alg_id: cursor.fixed::<u32>()?,
            major_version: cursor.short()?,
            minor_version: cursor.short()?,
            build_number: cursor.short()?,
            revision_number: cursor.short()?,
            flags: cursor.fixed::<u32>()?,
            public_key: cursor.blob()?,
            name: cursor.string()?,
            culture: cursor.string()?,
        })
    }
}
