use crate::{
    metadata::tables::{types::RowCursor, AssemblyRefRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for AssemblyRefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* major_version       */ 2 +
            /* minor_version       */ 2 +
            /* build_number        */ 2 +
            /* revision_number     */ 2 +
            /* flags               */ 4 +
            /* public_key_or_token */ sizes.blob_bytes() +
            /* name                */ sizes.str_bytes() +
            /* culture             */ sizes.str_bytes() +
            /* hash_value          */ sizes.blob_bytes()
        )
    }

    /// Decode one `AssemblyRef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::AssemblyRef, rid)?;

        Ok(AssemblyRefRaw {
            rid,
            token,
            offset,
            major_version: cursor.short()?,
            minor_version: cursor.short()?,
            build_number: cursor.short()?,
            revision_number: cursor.short()?,
            flags: cursor.fixed::<u32>()?,
            public_key_or_token: cursor.blob()?,
            name: cursor.string()?,
            culture: cursor.string()?,
            hash_value: cursor.blob()?,
        })
    }
}
