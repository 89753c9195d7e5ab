use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{CodedIndexType, DeclSecurityRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for DeclSecurityRaw {
    const TABLE_ID: TableId = TableId::DeclSecurity;

    fn validate(&self) -> Result<()> {
        self.parent.encode(CodedIndexType::HasDeclSecurity)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.action)?;
        self.parent.write(data, offset, sizes, CodedIndexType::HasDeclSecurity)?;
        write_le_at_dyn(data, offset, self.permission_set, sizes.is_large_blob())?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.parent.encode(CodedIndexType::HasDeclSecurity)?;
        Ok(Some(u64::from(owner) << 32))
    }
}
