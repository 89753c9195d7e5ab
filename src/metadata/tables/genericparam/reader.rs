use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, GenericParamRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for GenericParamRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* number */ 2 +
            /* flags  */ 2 +
            /* owner  */ sizes.coded_index_bytes(CodedIndexType::TypeOrMethodDef) +
            /* name   */ sizes.str_bytes()
        )
    }

    /// Decode one `GenericParam` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::GenericParam, rid)?;

        Ok(GenericParamRaw {
            rid,
            token,
            offset,
            number: cursor.short()?,
            flags: cursor.short()?,
            owner: cursor.coded(CodedIndexType::TypeOrMethodDef)?,
            name: cursor.string()?,
        })
    }
}
