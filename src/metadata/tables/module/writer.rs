use crate::{
    file::io::write_le_at_dyn,
    metadata::tables::{ModuleRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for ModuleRaw {
    const TABLE_ID: TableId = TableId::Module;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at_dyn(data, offset, self.generation, false)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.mvid, sizes.is_large_guid())?;
        write_le_at_dyn(data, offset, self.encid, sizes.is_large_guid())?;
        write_le_at_dyn(data, offset, self.encbaseid, sizes.is_large_guid())?;

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
        let row = ModuleRaw {
            rid: 1,
            token: Token::new(0x0000_0001),
            offset: 0,
            generation: 0x510F,
            name: 0xB72C,
            mvid: 0xC,
            encid: 0x15,
            encbaseid: 0x7,
        };
        let sizes = TableInfo::new_test(&[], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0x0F, 0x51, // generation
            0x2C, 0xB7, // name
            0x0C, 0x00, // mvid
            0x15, 0x00, // encid
            0x07, 0x00, // encbaseid
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = ModuleRaw {
            rid: 1,
            token: Token::new(0x0000_0001),
            offset: 0,
            generation: 0x7E4A,
            name: 0x22A5,
            mvid: 0x3_7E98,
            encid: 0x2_FD17,
            encbaseid: 0x2_53B2,
        };
        let sizes = TableInfo::new_test(&[], false, true, true);

        #[rustfmt::skip]
        let expected = [
            0x4A, 0x7E,             // generation
            0xA5, 0x22,             // name
            0x98, 0x7E, 0x03, 0x00, // mvid
            0x17, 0xFD, 0x02, 0x00, // encid
            0xB2, 0x53, 0x02, 0x00, // encbaseid
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }
}
