use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{RowWritable, StandAloneSigRaw, TableId, TableInfoRef},
    Result,
};

impl RowWritable for StandAloneSigRaw {
    const TABLE_ID: TableId = TableId::StandAloneSig;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.signature, sizes.is_large_blob())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            tables::{types::encode_single, TableInfo},
            token::Token,
        },
    };

    #[test]
    fn writes_narrow() {
        let row = StandAloneSigRaw {
            rid: 1,
            token: Token::new(0x1100_0001),
            offset: 0,
            signature: 0x7DCE,
        };
        let sizes = TableInfo::new_test(&[], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0xCE, 0x7D, // signature
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = StandAloneSigRaw {
            rid: 1,
            token: Token::new(0x1100_0001),
            offset: 0,
            signature: 0x17_E681,
        };
        let sizes = TableInfo::new_test(&[], false, true, true);

        #[rustfmt::skip]
        let expected = [
            0x81, 0xE6, 0x17, 0x00, // signature
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }
}
