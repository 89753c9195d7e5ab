use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{FieldRvaRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for FieldRvaRaw {
    const TABLE_ID: TableId = TableId::FieldRVA;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.rva)?;
        sizes.check_row(TableId::Field, self.field)?;
        write_le_at_dyn(data, offset, self.field, sizes.is_large(TableId::Field))?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.field;
        Ok(Some(u64::from(owner) << 32))
    }
}
