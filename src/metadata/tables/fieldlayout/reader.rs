use crate::{
    metadata::tables::{types::RowCursor, FieldLayoutRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for FieldLayoutRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* field_offset */ 4 +
            /* field        */ sizes.table_index_bytes(TableId::Field)
        )
    }

    /// Decode one `FieldLayout` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::FieldLayout, rid)?;

        Ok(FieldLayoutRaw {
            rid,
            token,
            offset,
            field_offset: cursor.fixed::<u32>()?,
            field: cursor.index(TableId::Field)?,
        })
    }
}
