use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{RowWritable, TableId, TableInfoRef, TypeSpecRaw},
    Result,
};

impl RowWritable for TypeSpecRaw {
    const TABLE_ID: TableId = TableId::TypeSpec;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.signature, sizes.is_large_blob())?;

        Ok(())
    }
}
