use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{AssemblyRefRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for AssemblyRefRaw {
    const TABLE_ID: TableId = TableId::AssemblyRef;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.major_version, false)?;
        write_le_at_dyn(data, offset, self.minor_version, false)?;
        write_le_at_dyn(data, offset, self.build_number, false)?;
        write_le_at_dyn(data, offset, self.revision_number, false)?;
        write_le_at(data, offset, self.flags)?;
        write_le_at_dyn(data, offset, self.public_key_or_token, sizes.is_large_blob())?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.culture, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.hash_value, sizes.is_large_blob())?;

        Ok(())
    }
}
