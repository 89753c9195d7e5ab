use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, GenericParamRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for GenericParamRaw {
    const TABLE_ID: TableId = TableId::GenericParam;

    fn validate(&self) -> Result<()> {
        self.owner.encode(CodedIndexType::TypeOrMethodDef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.number, false)?;
        write_le_at_dyn(data, offset, self.flags, false)?;
        self.owner.write(data, offset, sizes, CodedIndexType::TypeOrMethodDef)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.owner.encode(CodedIndexType::TypeOrMethodDef)?;
        let secondary = self.number;
        Ok(Some((u64::from(owner) << 32) | u64::from(secondary)))
    }
}
