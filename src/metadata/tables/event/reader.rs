use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, EventRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for EventRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* flags      */ 2 +
            /* name       */ sizes.str_bytes() +
            /* event_type */ sizes.coded_index_bytes(CodedIndexType::TypeDefOrRef)
        )
    }

    /// Decode one `Event` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::Event, rid)?;

        Ok(EventRaw {
            rid,
            token,
            offset,
            flags: cursor.short()?,
            name: cursor.string()?,
            event_type: cursor.coded(CodedIndexType::TypeDefOrRef)?,
        })
    }
}
