use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{EventMapRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for EventMapRaw {
    const TABLE_ID: TableId = TableId::EventMap;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        sizes.check_row(TableId::TypeDef, self.parent)?;
        write_le_at_dyn(data, offset, self.parent, sizes.is_large(TableId::TypeDef))?;
        sizes.check_list(TableId::Event, self.event_list)?;
        write_le_at_dyn(data, offset, self.event_list, sizes.is_large(TableId::Event))?;

        Ok(())
    }
}
