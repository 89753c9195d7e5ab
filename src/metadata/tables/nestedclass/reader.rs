use crate::{
    metadata::tables::{types::RowCursor, NestedClassRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for NestedClassRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* nested_class    */ sizes.table_index_bytes(TableId::TypeDef) +
            /* enclosing_class */ sizes.table_index_bytes(TableId::TypeDef)
        )
    }

    /// Decode one `NestedClass` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::NestedClass, rid)?;

        Ok(NestedClassRaw {
            rid,
            token,
            offset,
            nested_class: cursor.index(TableId::TypeDef)?,
            enclosing_class: cursor.index(TableId::TypeDef)?,
        })
    }
}
