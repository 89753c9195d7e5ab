use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{CodedIndexType, ExportedTypeRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ExportedTypeRaw {
    const TABLE_ID: TableId = TableId::ExportedType;

    fn validate(&self) -> Result<()> {
        self.implementation.encode(CodedIndexType::Implementation)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.flags)?;
        write_le_at(data, offset, self.type_def_id)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.namespace, sizes.is_large_str())?;
        self.implementation.write(data, offset, sizes, CodedIndexType::Implementation)?;

        Ok(())
    }
}
