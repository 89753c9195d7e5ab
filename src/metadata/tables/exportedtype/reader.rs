use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, ExportedTypeRaw, RowReadable, TableId, TableInfoRef,
    },
    Result,
};

impl RowReadable for ExportedTypeRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* flags          */ 4 +
            /* type_def_id    */ 4 +
            /* name           */ sizes.str_bytes() +
            /* namespace      */ sizes.str_bytes() +
            /* implementation */ sizes.coded_index_bytes(CodedIndexType::Implementation)
        )
    }

    /// Decode one `ExportedType` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::ExportedType, rid)?;

        Ok(ExportedTypeRaw {
            rid,
            token,
            offset,
            flags: cursor.fixed::<u32>()?,
            type_def_id: cursor.fixed::<u32>()?,
            name: cursor.string()?,
            namespace: cursor.string()?,
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
            0x7F, 0x98, 0xE9, 0xB8, // flags
            0x54, 0x6E, 0xB3, 0x54, // type_def_id
            0xDD, 0x3B,             // name
            0x2D, 0x88,             // namespace
            0xC0, 0x00,             // implementation
        ];
        let sizes = TableInfo::new_test(&[(TableId::File, 0x41)], false, false, false);

        let row: ExportedTypeRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ExportedTypeRaw {
                rid: 1,
                token: Token::new(0x2700_0001),
                offset: 0,
                flags: 0xB8E9_987F,
                type_def_id: 0x54B3_6E54,
                name: 0x3BDD,
                namespace: 0x882D,
                implementation: CodedIndex::new(TableId::File, 0x30),
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0xE7, 0x95, 0xED, 0xEC, // flags
            0x07, 0x48, 0x54, 0x6E, // type_def_id
            0x54, 0x5F, 0x1D, 0x00, // name
            0x7D, 0x8A, 0x12, 0x00, // namespace
            0x86, 0x73, 0x01, 0x00, // implementation
        ];
        let sizes = TableInfo::new_test(&[(TableId::ExportedType, 0x2_60E0)], true, true, false);

        let row: ExportedTypeRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            ExportedTypeRaw {
                rid: 1,
                token: Token::new(0x2700_0001),
                offset: 0,
                flags: 0xECED_95E7,
                type_def_id: 0x6E54_4807,
                name: 0x1D_5F54,
                namespace: 0x12_8A7D,
                implementation: CodedIndex::new(TableId::ExportedType, 0x5CE1),
            }
        );
    }
}
