use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, MethodSpecRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for MethodSpecRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* method        */ sizes.coded_index_bytes(CodedIndexType::MethodDefOrRef) +
            /* instantiation */ sizes.blob_bytes()
        )
    }

    /// Decode one `MethodSpec` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::MethodSpec, rid)?;

        Ok(MethodSpecRaw {
            rid,
            token,
            offset,
            method: cursor.coded(CodedIndexType::MethodDefOrRef)?,
            instantiation: cursor.blob()?,
        })
    }
}
