use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, CustomAttributeRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for CustomAttributeRaw {
    const TABLE_ID: TableId = TableId::CustomAttribute;

    fn validate(&self) -> Result<()> {
        self.parent.encode(CodedIndexType::HasCustomAttribute)?;
        self.constructor.encode(CodedIndexType::CustomAttributeType)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        self.parent.write(data, offset, sizes, CodedIndexType::HasCustomAttribute)?;
        self.constructor.write(data, offset, sizes, CodedIndexType::CustomAttributeType)?;
        write_le_at_dyn(data, offset, self.value, sizes.is_large_blob())?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.parent.encode(CodedIndexType::HasCustomAttribute)?;
        Ok(Some(u64::from(owner) << 32))
    }
}
