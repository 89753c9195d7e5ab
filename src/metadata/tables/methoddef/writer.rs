use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{MethodDefRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for MethodDefRaw {
    const TABLE_ID: TableId = TableId::MethodDef;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.rva)?;
        write_le_at_dyn(data, offset, self.impl_flags, false)?;
        write_le_at_dyn(data, offset, self.flags, false)?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.signature, sizes.is_large_blob())?;
        sizes.check_list(TableId::Param, self.param_list)?;
        write_le_at_dyn(data, offset, self.param_list, sizes.is_large(TableId::Param))?;

        Ok(())
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
        let row = MethodDefRaw {
            rid: 1,
            token: Token::new(0x0600_0001),
            offset: 0,
            rva: 0x0051_75FF,
            impl_flags: 0xD939,
            flags: 0x4B64,
            name: 0xD396,
            signature: 0x2B86,
            param_list: 0x5E,
        };
        let sizes = TableInfo::new_test(&[(TableId::Param, 0x5E)], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0xFF, 0x75, 0x51, 0x00, // rva
            0x39, 0xD9,             // impl_flags
            0x64, 0x4B,             // flags
            0x96, 0xD3,             // name
            0x86, 0x2B,             // signature
            0x5E, 0x00,             // param_list
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = MethodDefRaw {
            rid: 1,
            token: Token::new(0x0600_0001),
            offset: 0,
            rva: 0xB0B1_38E7,
            impl_flags: 0xA036,
            flags: 0xBCA9,
            name: 0x10_824C,
            signature: 0xF4DC,
            param_list: 0x7509,
        };
        let sizes = TableInfo::new_test(&[(TableId::Param, 0x1_311B)], true, false, true);

        #[rustfmt::skip]
        let expected = [
            0xE7, 0x38, 0xB1, 0xB0, // rva
            0x36, 0xA0,             // impl_flags
            0xA9, 0xBC,             // flags
            0x4C, 0x82, 0x10, 0x00, // name
            0xDC, 0xF4,             // signature
            0x09, 0x75, 0x00, 0x00, // param_list
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn reference_out_of_range() {
        let sizes = Arc::new(TableInfo::new_test(
            &[(TableId::Param, 0x10)],
            false,
            false,
            false,
        ));
        let row = MethodDefRaw {
            param_list: 0x12,
            ..Default::default()
        };

        let mut buffer = vec![0u8; MethodDefRaw::row_size(&sizes) as usize];
        let mut offset = 0;
        assert!(matches!(
            row.row_write(&mut buffer, &mut offset, 1, &sizes),
            Err(Error::InvalidReference { .. })
        ));
    }
}
