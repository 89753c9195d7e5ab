use crate::{
    metadata::tables::{types::RowCursor, FieldRvaRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for FieldRvaRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* rva   */ 4 +
            /* field */ sizes.table_index_bytes(TableId::Field)
        )
    }

    /// Decode one `FieldRva` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::FieldRVA, rid)?;

        Ok(FieldRvaRaw {
            rid,
            token,
            offset,
            rva: cursor.fixed::<u32>()?,
            field: cursor.index(TableId::Field)?,
        })
    }
}
