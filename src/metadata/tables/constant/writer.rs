use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{CodedIndexType, ConstantRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ConstantRaw {
    const TABLE_ID: TableId = TableId::Constant;

    fn validate(&self) -> Result<()> {
        self.parent.encode(CodedIndexType::HasConstant)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.c_type)?;
        write_le_at(data, offset, self.padding)?;
        self.parent.write(data, offset, sizes, CodedIndexType::HasConstant)?;
        write_le_at_dyn(data, offset, self.value, sizes.is_large_blob())?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.parent.encode(CodedIndexType::HasConstant)?;
        Ok(Some(u64::from(owner) << 32))
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
        let row = ConstantRaw {
            rid: 1,
            token: Token::new(0x0B00_0001),
            offset: 0,
            c_type: 0x02,
            padding: 0,
            parent: CodedIndex::new(TableId::Param, 0x98),
            value: 0x2667,
        };
        let sizes = TableInfo::new_test(&[(TableId::Param, 0x16F)], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0x02,       // c_type
            0x00,       // padding
            0x61, 0x02, // parent
            0x67, 0x26, // value
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = ConstantRaw {
            rid: 1,
            token: Token::new(0x0B00_0001),
            offset: 0,
            c_type: 0x12,
            padding: 0,
            parent: CodedIndex::new(TableId::Property, 0x1_296D),
            value: 0x377C,
        };
        let sizes = TableInfo::new_test(&[(TableId::Property, 0x1_5E71)], true, false, false);

        #[rustfmt::skip]
        let expected = [
            0x12,                   // c_type
            0x00,                   // padding
            0xB6, 0xA5, 0x04, 0x00, // parent
            0x7C, 0x37,             // value
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::Property, 0x10)],
            false,
            false,
            false,
        ));
        let row = ConstantRaw {
            parent: CodedIndex::new(TableId::Property, 0x11),
            ..Default::default()
        };

        let mut buffer = vec![0u8; ConstantRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }

    #[test]
    fn sort_key_follows_owner() {
        let first = ConstantRaw {
            parent: CodedIndex::new(TableId::Field, 2),
            ..Default::default()
        };
        let second = ConstantRaw {
            parent: CodedIndex::new(TableId::Property, 1),
            ..Default::default()
        };

        assert!(first.sort_key().unwrap() > second.sort_key().unwrap());
    }
}
