use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{NestedClassRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for NestedClassRaw {
    const TABLE_ID: TableId = TableId::NestedClass;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        sizes.check_row(TableId::TypeDef, self.nested_class)?;
        write_le_at_dyn(data, offset, self.nested_class, sizes.is_large(TableId::TypeDef))?;
        sizes.check_row(TableId::TypeDef, self.enclosing_class)?;
        write_le_at_dyn(data, offset, self.enclosing_class, sizes.is_large(TableId::TypeDef))?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.nested_class;
        Ok(Some(u64::from(owner) << 32))
    }
}
