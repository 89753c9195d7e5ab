use crate::{
    metadata::tables::{types::RowCursor, PropertyMapRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for PropertyMapRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* parent        */ sizes.table_index_bytes(TableId::TypeDef) +
            /* property_list */ sizes.table_index_bytes(TableId::Property)
        )
    }

    /// Decode one `PropertyMap` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::PropertyMap, rid)?;

        Ok(PropertyMapRaw {
            rid,
            token,
            offset,
            parent: cursor.index(TableId::TypeDef)?,
            property_list: cursor.index(TableId::Property)?,
        })
    }
}
