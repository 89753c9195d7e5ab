use crate::{
    metadata::tables::{types::RowCursor, FileRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for FileRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* flags      */ 4 +
            /* name       */ sizes.str_bytes() +
            /* hash_value */ sizes.blob_bytes()
        )
    }

    /// Decode one `File` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::File, rid)?;

        Ok(FileRaw {
            rid,
            token,
            offset,
            flags: cursor.fixed::<u32>()?,
            name: cursor.string()?,
            hash_value: cursor.blob()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        tables::{types::decode_single, TableInfo},
        token::Token,
    };

    #[test]
    fn narrow_columns() {
        #[rustfmt::skip]
        let data = [
            0xC6, 0xC8, 0x1B, 0x59, // flags
            0xEE, 0x97,             // name
            0x5A, 0x75,             // hash_value
        ];
        let sizes = TableInfo::new_test(&[], false, false, false);

        let row: FileRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            FileRaw {
                rid: 1,
                token: Token::new(0x2600_0001),
                offset: 0,
                flags: 0x591B_C8C6,
                name: 0x97EE,
                hash_value: 0x755A,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x68, 0xCC, 0xC6, 0xD2, // flags
            0xBA, 0x2D, 0x24, 0x00, // name
            0x4C, 0x6A, 0x17, 0x00, // hash_value
        ];
        let sizes = TableInfo::new_test(&[], true, true, true);

        let row: FileRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            FileRaw {
                rid: 1,
                token: Token::new(0x2600_0001),
                offset: 0,
                flags: 0xD2C6_CC68,
                name: 0x24_2DBA,
                hash_value: 0x17_6A4C,
            }
        );
    }
}
