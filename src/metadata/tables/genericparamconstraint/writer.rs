use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{
        CodedIndexType,
        GenericParamConstraintRaw,
        RowWritable,
        TableId,
        TableInfoRef,
    },
    Result,
};

impl RowWritable for GenericParamConstraintRaw {
    const TABLE_ID: TableId = TableId::GenericParamConstraint;

    fn validate(&self) -> Result<()> {
        self.constraint.encode(CodedIndexType::TypeDefOrRef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        sizes.check_row(TableId::GenericParam, self.owner)?;
        write_le_at_dyn(data, offset, self.owner, sizes.is_large(TableId::GenericParam))?;
        self.constraint.write(data, offset, sizes, CodedIndexType::TypeDefOrRef)?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.owner;
        Ok(Some(u64::from(owner) << 32))
    }
}
