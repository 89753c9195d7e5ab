use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, FieldMarshalRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for FieldMarshalRaw {
    const TABLE_ID: TableId = TableId::FieldMarshal;

    fn validate(&self) -> Result<()> {
        self.parent.encode(CodedIndexType::HasFieldMarshal)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        self.parent.write(data, offset, sizes, CodedIndexType::HasFieldMarshal)?;
        write_le_at_dyn(data, offset, self.native_type, sizes.is_large_blob())?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.parent.encode(CodedIndexType::HasFieldMarshal)?;
        Ok(Some(u64::from(owner) << 32))
    }
}
