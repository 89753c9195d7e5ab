use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{FieldRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for FieldRaw {
    const TABLE_ID: TableId = TableId::Field;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.flags, false)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.signature, sizes.is_large_blob())?;

        Ok(())
    }
}
