use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{ClassLayoutRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ClassLayoutRaw {
    const TABLE_ID: TableId = TableId::ClassLayout;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.packing_size)?;
        write_le_at(data, offset, self.class_size)?;
        sizes.check_row(TableId::TypeDef, self.parent)?;
        write_le_at_dyn(data, offset, self.parent, sizes.is_large(TableId::TypeDef))?;

        Ok(())
    }
}
