use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{FileRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for FileRaw {
    const TABLE_ID: TableId = TableId::File;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.flags)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.hash_value, sizes.is_large_blob())?;

        Ok(())
    }
}
