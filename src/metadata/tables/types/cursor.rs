//! Column decoding shared by the row readers.
//!
//! A [`RowCursor`] walks one row column by column. Heap, table and coded index columns take
//! their width from the [`super::TableInfo`] of the image, fixed columns from their type.

use crate::{
    file::io::{read_le_at, read_le_at_dyn, CilIO},
    metadata::{
        tables::{CodedIndex, CodedIndexType, TableId, TableInfoRef},
        token::Token,
    },
    Result,
};

pub(crate) struct RowCursor<'d, 'o> {
    data: &'d [u8],
    offset: &'o mut usize,
    sizes: &'d TableInfoRef,
}

impl<'d, 'o> RowCursor<'d, 'o> {
    pub(crate) fn new(data: &'d [u8], offset: &'o mut usize, sizes: &'d TableInfoRef) -> Self {
        RowCursor {
            data,
            offset,
            sizes,
        }
    }

    /// Token of row `rid` of `table`, along with the offset the row starts at.
    pub(crate) fn start(&self, table: TableId, rid: u32) -> Result<(Token, usize)> {
        Ok((Token::from_parts(table, rid)?, *self.offset))
    }

    pub(crate) fn fixed<T: CilIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, self.offset)
    }

    /// A 2-byte fixed column, widened.
    pub(crate) fn short(&mut self) -> Result<u32> {
        Ok(u32::from(self.fixed::<u16>()?))
    }

    pub(crate) fn string(&mut self) -> Result<u32> {
        read_le_at_dyn(self.data, self.offset, self.sizes.is_large_str())
    }

    pub(crate) fn guid(&mut self) -> Result<u32> {
        read_le_at_dyn(self.data, self.offset, self.sizes.is_large_guid())
    }

    pub(crate) fn blob(&mut self) -> Result<u32> {
        read_le_at_dyn(self.data, self.offset, self.sizes.is_large_blob())
    }

    /// A simple index into `table`.
    pub(crate) fn index(&mut self, table: TableId) -> Result<u32> {
        read_le_at_dyn(self.data, self.offset, self.sizes.is_large(table))
    }

    pub(crate) fn coded(&mut self, kind: CodedIndexType) -> Result<CodedIndex> {
        CodedIndex::read(self.data, self.offset, self.sizes, kind)
    }
}

/// Decode `data` as the single row of a `T` table and check that the row spans all of it.
#[cfg(test)]
pub(crate) fn decode_single<T: super::RowReadable + Clone>(
    data: &[u8],
    sizes: super::TableInfo,
) -> T {
    let sizes = std::sync::Arc::new(sizes);
    let table = super::MetadataTable::<T>::new(data, 1, &sizes).unwrap();

    assert_eq!(table.row_size() as usize, data.len());
    assert_eq!(table.iter().count(), 1);
    table.get(1).unwrap().clone()
}

/// Write `row` as row 1 under `sizes` and check that it fills exactly one row.
#[cfg(test)]
pub(crate) fn encode_single<T: super::RowWritable>(row: &T, sizes: super::TableInfo) -> Vec<u8> {
    let sizes = std::sync::Arc::new(sizes);
    let mut buffer = vec![0u8; T::row_size(&sizes) as usize];
    let mut offset = 0;
    row.row_write(&mut buffer, &mut offset, 1, &sizes).unwrap();

    assert_eq!(offset, buffer.len());
    buffer
}
