use crate::{
    metadata::tables::{types::RowCursor, RowReadable, StandAloneSigRaw, TableId, TableInfoRef},
    Result,
};

impl RowReadable for StandAloneSigRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* signature */ sizes.blob_bytes()
        )
    }

    /// Decode one `StandAloneSig` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::StandAloneSig, rid)?;

        Ok(StandAloneSigRaw {
            rid,
            token,
            offset,
            signature: cursor.blob()?,
        })
    }
}
