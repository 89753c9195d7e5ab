use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, EventRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for EventRaw {
    const TABLE_ID: TableId = TableId::Event;

    fn validate(&self) -> Result<()> {
        self.event_type.encode(CodedIndexType::TypeDefOrRef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.flags, false)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        self.event_type.write(data, offset, sizes, CodedIndexType::TypeDefOrRef)?;

        Ok(())
    }
}
