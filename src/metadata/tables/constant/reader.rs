use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, ConstantRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for ConstantRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* c_type  */ 1 +
            /* padding */ 1 +
            /* parent  */ sizes.coded_index_bytes(CodedIndexType::HasConstant) +
            /* value   */ sizes.blob_bytes()
        )
    }

    /// Decode one `Constant` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::Constant, rid)?;

        Ok(ConstantRaw {
            rid,
            token,
            offset,
            c_type: cursor.fixed::<u8>()?,
            padding: cursor.fixed::<u8>()?,
            parent: cursor.coded(CodedIndexType::HasConstant)?,
            value: cursor.blob()?,
        })
    }
}
