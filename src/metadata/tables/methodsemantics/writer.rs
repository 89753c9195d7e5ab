use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, MethodSemanticsRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for MethodSemanticsRaw {
    const TABLE_ID: TableId = TableId::MethodSemantics;

    fn validate(&self) -> Result<()> {
        self.association.encode(CodedIndexType::HasSemantics)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.semantics, false)?;
        sizes.check_row(TableId::MethodDef, self.method)?;
        write_le_at_dyn(data, offset, self.method, sizes.is_large(TableId::MethodDef))?;
        self.association.write(data, offset, sizes, CodedIndexType::HasSemantics)?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.association.encode(CodedIndexType::HasSemantics)?;
        Ok(Some(u64::from(owner) << 32))
    }
}
