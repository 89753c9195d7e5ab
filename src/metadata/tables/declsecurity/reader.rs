use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, DeclSecurityRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for DeclSecurityRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* action         */ 2 +
            /* parent         */ sizes.coded_index_bytes(CodedIndexType::HasDeclSecurity) +
            /* permission_set */ sizes.blob_bytes()
        )
    }

    /// Decode one `DeclSecurity` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::DeclSecurity, rid)?;

        Ok(DeclSecurityRaw {
            rid,
            token,
            offset,
            action: cursor.fixed::<u16>()?,
            parent: cursor.coded(CodedIndexType::HasDeclSecurity)?,
            permission_set: cursor.blob()?,
        })
    }
}
