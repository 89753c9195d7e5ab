use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, ManifestResourceRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for ManifestResourceRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* offset_field   */ 4 +
            /* flags          */ 4 +
            /* name           */ sizes.str_bytes() +
            /* implementation */ sizes.coded_index_bytes(CodedIndexType::Implementation)
        )
    }

    /// Decode one `ManifestResource` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::ManifestResource, rid)?;

        Ok(ManifestResourceRaw {
            rid,
            token,
            offset,
            offset_field: cursor.fixed::<u32>()?,
            flags: cursor.fixed::<u32>()?,
            name: cursor.string()?,
            implementation: cursor.coded(CodedIndexType::Implementation)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{
        tables::{types::decode_single, CodedIndex, TableInfo},
        token::Token,
    };

    #[test]
    fn narrow_columns() {
        #[rustfmt::skip]
        let data = [
            0x97, 0x9E, 0x92, 0x0B, // offset_field
            0x82, 0x5A, 0xFF, 0xE5, // flags
            0xA0, 0x76,             // name
            0x75, 0x05,             // implementation
        ];
        let sizes = TableInfo::new_test(&[(TableId::AssemblyRef, 0x284)], false, false, false);

        let row: ManifestResourceRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ManifestResourceRaw {
                rid: 1,
                token: Token::new(0x2800_0001),
                offset: 0,
                offset_field: 0x0B92_9E97,
                flags: 0xE5FF_5A82,
                name: 0x76A0,
                implementation: CodedIndex::new(TableId::AssemblyRef, 0x15D),
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x1E, 0x3F, 0x87, 0x4C, // offset_field
            0x5E, 0xB4, 0x6E, 0x79, // flags
            0x09, 0xF8, 0x4B, 0x00, // name
            0x35, 0x3A, 0x05, 0x00, // implementation
        ];
        let sizes = TableInfo::new_test(&[(TableId::AssemblyRef, 0x3_CEE3)], true, true, true);

        let row: ManifestResourceRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ManifestResourceRaw {
                rid: 1,
                token: Token::new(0x2800_0001),
                offset: 0,
                offset_field: 0x4C87_3F1E,
                flags: 0x796E_B45E,
                name: 0x4B_F809,
                implementation: CodedIndex::new(TableId::AssemblyRef, 0x1_4E8D),
            }
        );
    }
}
