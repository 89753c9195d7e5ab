use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, MethodImplRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for MethodImplRaw {
    const TABLE_ID: TableId = TableId::MethodImpl;

    fn validate(&self) -> Result<()> {
        self.method_body.encode(CodedIndexType::MethodDefOrRef)?;
        self.method_declaration.encode(CodedIndexType::MethodDefOrRef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        sizes.check_row(TableId::TypeDef, self.class)?;
        write_le_at_dyn(data, offset, self.class, sizes.is_large(TableId::TypeDef))?;
        self.method_body.write(data, offset, sizes, CodedIndexType::MethodDefOrRef)?;
        self.method_declaration.write(data, offset, sizes, CodedIndexType::MethodDefOrRef)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        metadata::{
            tables::{types::encode_single, CodedIndex, RowReadable, TableInfo},
            token::Token,
        },
        Error,
    };

    #[test]
    fn writes_narrow() {
        let row = MethodImplRaw {
            rid: 1,
            token: Token::new(0x1900_0001),
            offset: 0,
            class: 0x43,
            method_body: CodedIndex::new(TableId::MemberRef, 0xF9),
            method_declaration: CodedIndex::new(TableId::MethodDef, 0x271),
        };
        let sizes = TableInfo::new_test(
            &[(TableId::TypeDef, 0x61), (TableId::MemberRef, 0x15A), (TableId::MethodDef, 0x29C)],
            false,
            false,
            false,
        );

        #[rustfmt::skip]
        let expected = [
            0x43, 0x00, // class
            0xF3, 0x01, // method_body
            0xE2, 0x04, // method_declaration
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = MethodImplRaw {
            rid: 1,
            token: Token::new(0x1900_0001),
            offset: 0,
            class: 0x2_EC95,
            method_body: CodedIndex::new(TableId::MethodDef, 0x2_FCA0),
            method_declaration: CodedIndex::new(TableId::MethodDef, 0x82E),
        };
        let sizes = TableInfo::new_test(
            &[(TableId::TypeDef, 0x3_0C2A), (TableId::MethodDef, 0x3_EF46)],
            true,
            false,
            false,
        );

        #[rustfmt::skip]
        let expected = [
            0x95, 0xEC, 0x02, 0x00, // class
            0x40, 0xF9, 0x05, 0x00, // method_body
            0x5C, 0x10, 0x00, 0x00, // method_declaration
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::TypeDef, 0x10), (TableId::MemberRef, 0x10), (TableId::MethodDef, 0x10)],
            false,
            false,
            false,
        ));
        let row = MethodImplRaw {
            class: 0x11,
            ..Default::default()
        };

        let mut buffer = vec![0u8; MethodImplRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }
}
