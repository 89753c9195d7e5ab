use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, InterfaceImplRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for InterfaceImplRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* class     */ sizes.table_index_bytes(TableId::TypeDef) +
            /* interface */ sizes.coded_index_bytes(CodedIndexType::TypeDefOrRef)
        )
    }

    /// Decode one `InterfaceImpl` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::InterfaceImpl, rid)?;

        Ok(InterfaceImplRaw {
            rid,
            token,
            offset,
            class: cursor.index(TableId::TypeDef)?,
            interface: cursor.coded(CodedIndexType::TypeDefOrRef)?,
        })
    }
}
