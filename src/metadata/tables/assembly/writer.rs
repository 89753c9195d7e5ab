use crate::{
    file::io::{write_le_at, write_le_at_dyn},
    metadata::tables::{AssemblyRaw, RowWritable, TableId, TableInfoRef},
    Result,
};

impl RowWritable for AssemblyRaw {
    const TABLE_ID: TableId = TableId::Assembly;

    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        _rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()> {
        write_le_at(data, offset, self.hash_alg_id)?;
        write_le_at_dyn(data, offset, self.major_version, false)?;
        write_le_at_dyn(data, offset, self.minor_version, false)?;
        write_le_at_dyn(data, offset, self.build_number, false)?;
        write_le_at_dyn(data, offset, self.revision_number, false)?;
        write_le_at(data, offset, self.flags)?;
        write_le_at_dyn(data, offset, self.public_key, sizes.is_large_blob())?;
        write_le_at_dyn(data, offset, self.name, sizes.is_large_str())?;
        write_le_at_dyn(data, offset, self.culture, sizes.is_large_str())?;

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
        let row = AssemblyRaw {
            rid: 1,
            token: Token::new(0x2000_0001),
            offset: 0,
            hash_alg_id: 0x80B2_A13F,
            major_version: 0x4B11,
            minor_version: 0x40B1,
            build_number: 0xAA86,
            revision_number: 0x88A8,
            flags: 0x0D00_6ADD,
            public_key: 0x4E9C,
            name: 0xDDC6,
            culture: 0x78D6,
        };
        let sizes = TableInfo::new_test(&[], false, false, false);

        #[rustfmt::skip]
        let expected = [
            0x3F, 0xA1, 0xB2, 0x80, // hash_alg_id
            0x11, 0x4B,             // major_version
            0xB1, 0x40,             // minor_version
            0x86, 0xAA,             // build_number
            0xA8, 0x88,             // revision_number
            0xDD, 0x6A, 0x00, 0x0D, // flags
            0x9C, 0x4E,             // public_key
            0xC6, 0xDD,             // name
            0xD6, 0x78,             // culture
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }

    #[test]
    fn writes_mixed() {
        let row = AssemblyRaw {
            rid: 1,
            token: Token::new(0x2000_0001),
            offset: 0,
            hash_alg_id: 0x23A4_99E9,
            major_version: 0x193C,
            minor_version: 0x3368,
            build_number: 0xE7D9,
            revision_number: 0xD866,
            flags: 0xF5D4_529B,
            public_key: 0x46_300D,
            name: 0x90C5,
            culture: 0x8F8,
        };
        let sizes = TableInfo::new_test(&[], false, true, true);

        #[rustfmt::skip]
        let expected = [
            0xE9, 0x99, 0xA4, 0x23, // hash_alg_id
            0x3C, 0x19,             // major_version
            0x68, 0x33,             // minor_version
            0xD9, 0xE7,             // build_number
            0x66, 0xD8,             // revision_number
            0x9B, 0x52, 0xD4, 0xF5, // flags
            0x0D, 0x30, 0x46, 0x00, // public_key
            0xC5, 0x90,             // name
            0xF8, 0x08,             // culture
        ];
        assert_eq!(encode_single(&row, sizes), expected);
    }
}
