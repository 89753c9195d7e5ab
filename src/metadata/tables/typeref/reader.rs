use crate::{
    metadata::tables::{
        types::RowCursor, CodedIndexType, RowReadable, TableId, TableInfoRef, TypeRefRaw,
    },
    Result,
};

impl RowReadable for TypeRefRaw {
    #[rustfmt::skip]
    fn row_size(sizes: &TableInfoRef) -> u32 {
        u32::from(
            /* resolution_scope */ sizes.coded_index_bytes(CodedIndexType::ResolutionScope) +
            /* type_name        */ sizes.str_bytes() +
            /* type_namespace   */ sizes.str_bytes()
        )
    }

    /// Decode one `TypeRef` row at `offset`.
    ///
    /// ## Errors
    /// Returns an error if the data is truncated or a coded index selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self> {
        let mut cursor = RowCursor::new(data, offset, sizes);
        let (token, offset) = cursor.start(TableId::TypeRef, rid)?;

        Ok(TypeRefRaw {
            rid,
            token,
            offset,
            resolution_scope: cursor.coded(CodedIndexType::ResolutionScope)?,
            type_name: cursor.string()?,
            type_namespace: cursor.string()?,
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
            0x71, 0x01, // resolution_scope
            0xB7, 0x6B, // type_name
            0xC0, 0x30, // type_namespace
        ];
        let sizes = TableInfo::new_test(&[(TableId::ModuleRef, 0x1B5)], false, false, false);

        let row: TypeRefRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            TypeRefRaw {
                rid: 1,
                token: Token::new(0x0100_0001),
                offset: 0,
                resolution_scope: CodedIndex::new(TableId::ModuleRef, 0x5C),
                type_name: 0x6BB7,
                type_namespace: 0x30C0,
            }
        );
    }

    #[test]
    fn mixed_widths() {
        #[rustfmt::skip]
        let data = [
            0x19, 0xD3, 0x05, 0x00, // resolution_scope
            0x35, 0x98, 0x14, 0x00, // type_name
            0x9A, 0x08, 0x4C, 0x00, // type_namespace
        ];
        let sizes = TableInfo::new_test(&[(TableId::ModuleRef, 0x2_E4E2)], true, true, false);

        let row: TypeRefRaw = decode_single(&data, sizes);
        assert_eq!(
            row,
            TypeRefRaw {
                rid: 1,
                token: Token::new(0x0100_0001),
                offset: 0,
                resolution_scope: CodedIndex::new(TableId::ModuleRef, 0x1_74C6),
                type_name: 0x14_9835,
                type_namespace: 0x4C_089A,
            }
        );
    }
}
