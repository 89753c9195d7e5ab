use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, RowWritable, TableId, TableInfoRef, TypeRefRaw},
    Result,
};

impl RowWritable for TypeRefRaw {
    const TABLE_ID: TableId = TableId::TypeRef;

    fn validate(&self) -> Result<()> {
        self.resolution_scope.encode(CodedIndexType::ResolutionScope)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        self.resolution_scope.write(data, offset, sizes, CodedIndexType::ResolutionScope)?;
        write_le_at_dyn(data, offset, self.type_name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.type_namespace, sizes.is_large_str())?;

        Ok(())
    }
}
