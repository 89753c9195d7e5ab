use crate::{
    metadata::tables::{types::RowCursor, PropertyRaw, RowReadable, TableId, TableInfoRef},
    Result,
};

impl RowReadable for PropertyRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* flags     */ 2 +
            /* name      */ sizes.str_bytes() +
            /* signature */ sizes.blob_bytes()
        )
    }

    /// Decode one `Property` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::Property, rid)?;

        Ok(PropertyRaw {
            rid,
            token,
            offset,
            flags: cursor.short()?,
            name: cursor.string()?,
            signature: cursor.blob()?,
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
            0x4E, 0x7F, // flags
            0xE4, 0xD0, // name
            0x51, 0x12, // signature
        ];
        let sizes = TableInfo::new_test(&[], false, false, false);

        let row: PropertyRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            PropertyRaw {
                rid: 1,
                token: Token::new(0x1700_0001),
                offset: 0,
                flags: 0x7F4E,
                name: 0xD0E4,
                signature: 0x1251,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x12, 0xB7,             // flags
            0xFE, 0x64, 0x5C, 0x00, // name
            0x00, 0x9A,             // signature
        ];
        let sizes = TableInfo::new_test(&[], true, false, false);

        let row: PropertyRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            PropertyRaw {
                rid: 1,
                token: Token::new(0x1700_0001),
                offset: 0,
                flags: 0xB712,
                name: 0x5C_64FE,
                signature: 0x9A00,
            }
        );
    }
}
