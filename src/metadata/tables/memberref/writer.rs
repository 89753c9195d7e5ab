use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, MemberRefRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for MemberRefRaw {
    const TABLE_ID: TableId = TableId::MemberRef;

    fn validate(&self) -> Result<()> {
        self.class.encode(CodedIndexType::MemberRefParent)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        self.class.write(data, offset, sizes, CodedIndexType::MemberRefParent)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.signature, sizes.is_large_blob())?;

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
        let row = MemberRefRaw {
            rid: 1,
            token: Token::new(0x0A00_0001),
            offset: 0,
            class: CodedIndex::new(TableId::TypeDef, 0x35),
            name: 0x9DEF,
            signature: 0x1AE3,
        };
        let sizes = TableInfo::new_test(&[(TableId::TypeDef, 0x10D)], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0xA8, 0x01, // class
            0xEF, 0x9D, // name
            0xE3, 0x1A, // signature
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = MemberRefRaw {
            rid: 1,
            token: Token::new(0x0A00_0001),
            offset: 0,
            class: CodedIndex::new(TableId::TypeSpec, 0x3_3D36),
            name: 0x3A15,
            signature: 0x9CB8,
        };
        let sizes = TableInfo::new_test(&[(TableId::TypeSpec, 0x3_DEB3)], false, false, true);

        #[rustfmt::skip]
        let expected = [
            0xB4, 0xE9, 0x19, 0x00, // class
            0x15, 0x3A,             // name
            0xB8, 0x9C,             // signature
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::TypeDef, 0x10)],
            false,
            false,
            false,
        ));
        let row = MemberRefRaw {
            class: CodedIndex::new(TableId::TypeDef, 0x11),
            ..Default::default()
        };

        let mut buffer = vec![0u8; MemberRefRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }
}
