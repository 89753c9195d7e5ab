use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{ParamRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ParamRaw {
    const TABLE_ID: TableId = TableId::Param;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.flags, false)?;
        write_le_at_dyn(data, offset, self.sequence, false)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;

        Ok(())
    }
}
