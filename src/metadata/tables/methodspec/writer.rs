use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{CodedIndexType, MethodSpecRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for MethodSpecRaw {
    const TABLE_ID: TableId = TableId::MethodSpec;

    fn validate(&self) -> Result<()> {
        self.method.encode(CodedIndexType::MethodDefOrRef)?;
        Ok(())
    }

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        self.method.write(data, offset, sizes, CodedIndexType::MethodDefOrRef)?;
        write_le_at_dyn(data, offset, self.instantiation, sizes.is_large_blob())?;

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
        let row = MethodSpecRaw {
            rid: 1,
            token: Token::new(0x2B00_0001),
            offset: 0,
            method: CodedIndex::new(TableId::MethodDef, 0xE),
            instantiation: 0xCF21,
        };
        let sizes = TableInfo::new_test(&[(TableId::MethodDef, 0x11C)], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0x1C, 0x00, // method
            0x21, 0xCF, // instantiation
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = MethodSpecRaw {
            rid: 1,
            token: Token::new(0x2B00_0001),
            offset: 0,
            method: CodedIndex::new(TableId::MethodDef, 0x2_39F3),
            instantiation: 0x24_F382,
        };
        let sizes = TableInfo::new_test(&[(TableId::MethodDef, 0x3_3747)], true, true, true);

        #[rustfmt::skip]
        let expected = [
            0xE6, 0x73, 0x04, 0x00, // method
            0x82, 0xF3, 0x24, 0x00, // instantiation
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::MethodDef, 0x10)],
            false,
            false,
            false,
        ));
        let row = MethodSpecRaw {
            method: CodedIndex::new(TableId::MethodDef, 0x11),
            ..Default::default()
        };

        let mut buffer = vec![0u8; MethodSpecRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }
}
