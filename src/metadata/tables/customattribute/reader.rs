use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, CustomAttributeRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for CustomAttributeRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* parent      */ sizes.coded_index_bytes(CodedIndexType::HasCustomAttribute) +
            /* constructor */ sizes.coded_index_bytes(CodedIndexType::CustomAttributeType) +
            /* value       */ sizes.blob_bytes()
        )
    }

    /// Decode one `CustomAttribute` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::CustomAttribute, rid)?;

        Ok(CustomAttributeRaw {
            rid,
            token,
            offset,
            parent: cursor.coded(CodedIndexType::HasCustomAttribute)?,
            constructor: cursor.coded(CodedIndexType::CustomAttributeType)?,
            value: cursor.blob()?,
        })
    }
}
