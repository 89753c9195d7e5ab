use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, MethodSemanticsRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for MethodSemanticsRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* semantics   */ 2 +
            /* method      */ sizes.table_index_bytes(TableId::MethodDef) +
            /* association */ sizes.coded_index_bytes(CodedIndexType::HasSemantics)
        )
    }

    /// Decode one `MethodSemantics` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::MethodSemantics, rid)?;

        Ok(MethodSemanticsRaw {
            rid,
            token,
            offset,
            semantics: cursor.short()?,
            method: cursor.index(TableId::MethodDef)?,
            association: cursor.coded(CodedIndexType::HasSemantics)?,
        })
    }
}
