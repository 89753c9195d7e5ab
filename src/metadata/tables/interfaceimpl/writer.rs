use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, InterfaceImplRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for InterfaceImplRaw {
    const TABLE_ID: TableId = TableId::InterfaceImpl;

    fn validate(&self) -> Result<()> {
        self.interface.encode(CodedIndexType::TypeDefOrRef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        sizes.check_row(TableId::TypeDef, self.class)?;
        write_le_at_dyn(data, offset, self.class, sizes.is_large(TableId::TypeDef))?;
        self.interface.write(data, offset, sizes, CodedIndexType::TypeDefOrRef)?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.class;
        let secondary = self.interface.encode(CodedIndexType::TypeDefOrRef)?;
        Ok(Some((u64::from(owner) << 32) | u64::from(secondary)))
    }
}
