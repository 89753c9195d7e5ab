use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, ImplMapRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ImplMapRaw {
    const TABLE_ID: TableId = TableId::ImplMap;

    fn validate(&self) -> Result<()> {
        self.member_forwarded.encode(CodedIndexType::MemberForwarded)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.mapping_flags, false)?;
        self.member_forwarded.write(data, offset, sizes, CodedIndexType::MemberForwarded)?;
        write_le_at_dyn(data, offset, self.import_name, sizes.is_large_str())?;
        sizes.check_row(TableId::ModuleRef, self.import_scope)?;
        write_le_at_dyn(data, offset, self.import_scope, sizes.is_large(TableId::ModuleRef))?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.member_forwarded.encode(CodedIndexType::MemberForwarded)?;
        Ok(Some(u64::from(owner) << 32))
    }
}
