use crate::{
    metadata::tables::{types::RowCursor, EventMapRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for EventMapRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* parent     */ sizes.table_index_bytes(TableId::TypeDef) +
            /* event_list */ sizes.table_index_bytes(TableId::Event)
        )
    }

    /// Decode one `EventMap` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::EventMap, rid)?;

        Ok(EventMapRaw {
            rid,
            token,
            offset,
            parent: cursor.index(TableId::TypeDef)?,
            event_list: cursor.index(TableId::Event)?,
        })
    }
}
