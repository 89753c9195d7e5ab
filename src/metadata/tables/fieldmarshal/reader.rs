use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, FieldMarshalRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for FieldMarshalRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* parent      */ sizes.coded_index_bytes(CodedIndexType::HasFieldMarshal) +
            /* native_type */ sizes.blob_bytes()
        )
    }

    /// Decode one `FieldMarshal` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::FieldMarshal, rid)?;

        Ok(FieldMarshalRaw {
            rid,
            token,
            offset,
            parent: cursor.coded(CodedIndexType::HasFieldMarshal)?,
            native_type: cursor.blob()?,
        })
    }
}
