use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{CodedIndexType, RowWritable, TableId, TableInfoRef, TypeDefRaw},
    Result,
};

impl RowWritable for TypeDefRaw {
    const TABLE_ID: TableId = TableId::TypeDef;

    fn validate(&self) -> Result<()> {
        self.extends.encode(CodedIndexType::TypeDefOrRef)?;
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
        write_le_at_dyn(data, offset, self.type_name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.type_namespace, sizes.is_large_str())?;
        self.extends.write(data, offset, sizes, CodedIndexType::TypeDefOrRef)?;
        sizes.check_list(TableId::Field, self.field_list)?;
        write_le_at_dyn(data, offset, self.field_list, sizes.is_large(TableId::Field))?;
        sizes.check_list(TableId::MethodDef, self.method_list)?;
        write_le_at_dyn(data, offset, self.method_list, sizes.is_large(TableId::MethodDef))?;

        Ok(())
    }
}
