use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{FieldLayoutRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for FieldLayoutRaw {
    const TABLE_ID: TableId = TableId::FieldLayout;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.field_offset)?;
        sizes.check_row(TableId::Field, self.field)?;
        write_le_at_dyn(data, offset, self.field, sizes.is_large(TableId::Field))?;

        Ok(())
    }

    fn sort_key(&self) -> Result<Option<u64>> {
        let owner = self.field;
        Ok(Some(u64::from(owner) << 32))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        metadata::{
            tables::{types::encode_single, RowReadable, TableInfo},
            token::Token,
        },
        Error,
    };

    #[test]
    fn writes_narrow() {
        let row = FieldLayoutRaw {
            rid: 1,
            token: Token::new(0x1000_0001),
            offset: 0,
            field_offset: 0x2DB0_F0C7,
            field: 0x63,
        };
        let sizes = TableInfo::new_test(&[(TableId::Field, 0xB2)], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0xC7, 0xF0, 0xB0, 0x2D, // field_offset
            0x63, 0x00,             // field
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = FieldLayoutRaw {
            rid: 1,
            token: Token::new(0x1000_0001),
            offset: 0,
            field_offset: 0x41F2_6EC3,
            field: 0x1_247E,
        };
        let sizes = TableInfo::new_test(&[(TableId::Field, 0x3_B932)], true, true, true);

        #[rustfmt::skip]
        let expected = [
            0xC3, 0x6E, 0xF2, 0x41, // field_offset
            0x7E, 0x24, 0x01, 0x00, // field
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::Field, 0x10)],
            false,
            false,
            false,
        ));
        let row = FieldLayoutRaw {
            field: 0x11,
            ..Default::default()
        };

        let mut buffer = vec![0u8; FieldLayoutRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }

    #[test]
    fn sort_key_follows_owner() {
        let first = FieldLayoutRaw {
            field: 2,
            ..Default::default()
        };
        let second = FieldLayoutRaw {
            field: 3,
            ..Default::default()
        };

        assert!(first.sort_key().unwrap() < second.sort_key().unwrap());
    }
}
