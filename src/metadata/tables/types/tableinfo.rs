//! Column widths of the metadata tables.
//!
//! Whether a table index, coded index or heap index column is 2 or 4 bytes wide depends on the
//! final size of the referenced tables and heaps. [`TableInfo`] captures those sizes once, either
//! from the header of a parsed `#~` stream or from the final row counts of the writer, and answers
//! every width question from them:
//!
//! - table index: 4 bytes if the target table has more than `0xFFFF` rows
//! - coded index: 4 bytes if the largest candidate row count plus the tag does not fit in 16 bits
//! - heap index: 4 bytes if the heap is larger than `0xFFFF` bytes
//!
//! Every row of a table shares one width, see [`crate::metadata::tables::calculate_table_row_size`].

use std::sync::Arc;

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

use crate::{
    file::io::{read_le, read_le_at},
    metadata::tables::{CodedIndexType, TableId},
    Error::{self, OutOfBounds},
    Result,
};

bitflags! {
    /// The `HeapSizes` flags of the `#~` header.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeapSizes: u8 {
        /// `#Strings` indices are 4 bytes wide
        const LARGE_STRINGS = 0x01;
        /// `#GUID` indices are 4 bytes wide
        const LARGE_GUID = 0x02;
        /// `#Blob` indices are 4 bytes wide
        const LARGE_BLOB = 0x04;
    }
}

impl HeapSizes {
    /// Flags for heaps of the given byte sizes.
    #[must_use]
    pub fn from_heap_lengths(strings: usize, guids: usize, blobs: usize) -> Self {
        let mut flags = HeapSizes::empty();
        flags.set(HeapSizes::LARGE_STRINGS, strings > 0xFFFF);
        flags.set(HeapSizes::LARGE_GUID, guids > 0xFFFF);
        flags.set(HeapSizes::LARGE_BLOB, blobs > 0xFFFF);
        flags
    }
}

/// Row count of a single table and the derived index width.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct TableRowInfo {
    /// Number of rows
    pub rows: u32,
    /// Bits needed to store the largest row index
    pub bits: u8,
    /// Indices into this table are 4 bytes wide
    pub is_large: bool,
}

impl TableRowInfo {
    /// Create a new `TableRowInfo` for a table with `rows` rows.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(rows: u32) -> Self {
        let bits = if rows == 0 {
            1
        } else {
            (32 - rows.leading_zeros()) as u8
        };

        Self {
            rows,
            bits,
            is_large: rows > u32::from(u16::MAX),
        }
    }
}

/// Row counts and heap widths of one metadata image, and every column width derived from them.
#[derive(Clone, Debug, Default)]
pub struct TableInfo {
    rows: Vec<TableRowInfo>,
    coded_indexes: Vec<u8>,
    heap_sizes: HeapSizes,
}

/// Shared reference to a [`TableInfo`]
pub type TableInfoRef = Arc<TableInfo>;

impl TableInfo {
    /// Read the row counts of a `#~` stream.
    ///
    /// `data` starts at the `#~` stream, `valid_bitvec` is its `valid` mask. The row counts
    /// follow the 24 byte header, one `u32` per set bit in table order.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the stream ends inside the row counts, and
    /// [`Error::UnknownTable`] if a bit above the last known table is set.
    pub fn new(data: &[u8], valid_bitvec: u64) -> Result<Self> {
        let unknown = valid_bitvec >> TableId::COUNT;
        if unknown != 0 {
            #[allow(clippy::cast_possible_truncation)]
            let tag = (TableId::COUNT as u32 + unknown.trailing_zeros()) as u8;
            return Err(Error::UnknownTable(tag));
        }

        let mut row_counts = [0u32; TableId::COUNT];
        let mut next_row_offset = 24;

        for table_id in TableId::iter() {
            if (valid_bitvec & table_id.mask()) == 0 {
                continue;
            }

            row_counts[table_id as usize] = read_le_at::<u32>(data, &mut next_row_offset)?;
        }

        let Some(flags) = data.get(6..) else {
            return Err(OutOfBounds);
        };
        let heap_sizes = HeapSizes::from_bits_truncate(read_le::<u8>(flags)?);

        Ok(Self::from_row_counts(&row_counts, heap_sizes))
    }

    /// Build from final row counts (indexed by table tag) and heap width flags.
    #[must_use]
    pub fn from_row_counts(row_counts: &[u32], heap_sizes: HeapSizes) -> Self {
        let mut table_info = TableInfo {
            rows: vec![TableRowInfo::default(); TableId::COUNT],
            coded_indexes: vec![0; CodedIndexType::COUNT],
            heap_sizes,
        };

        for (slot, rows) in table_info.rows.iter_mut().zip(row_counts) {
            *slot = TableRowInfo::new(*rows);
        }

        table_info.calculate_coded_index_widths();
        table_info
    }

    #[cfg(test)]
    pub(crate) fn new_test(
        valid_tables: &[(TableId, u32)],
        large_str: bool,
        large_blob: bool,
        large_guid: bool,
    ) -> Self {
        let mut row_counts = [0u32; TableId::COUNT];
        for (table, rows) in valid_tables {
            row_counts[*table as usize] = *rows;
        }

        let mut heap_sizes = HeapSizes::empty();
        heap_sizes.set(HeapSizes::LARGE_STRINGS, large_str);
        heap_sizes.set(HeapSizes::LARGE_BLOB, large_blob);
        heap_sizes.set(HeapSizes::LARGE_GUID, large_guid);

        Self::from_row_counts(&row_counts, heap_sizes)
    }

    /// The heap width flags as stored in the `#~` header.
    #[must_use]
    pub fn heap_sizes(&self) -> HeapSizes {
        self.heap_sizes
    }

    /// Returns true if indices into `id` are 4 bytes wide.
    #[must_use]
    pub fn is_large(&self, id: TableId) -> bool {
        self.rows[id as usize].is_large
    }

    /// Returns true if `#Strings` indices are 4 bytes wide.
    #[must_use]
    pub fn is_large_str(&self) -> bool {
        self.heap_sizes.contains(HeapSizes::LARGE_STRINGS)
    }

    /// Returns true if `#GUID` indices are 4 bytes wide.
    #[must_use]
    pub fn is_large_guid(&self) -> bool {
        self.heap_sizes.contains(HeapSizes::LARGE_GUID)
    }

    /// Returns true if `#Blob` indices are 4 bytes wide.
    #[must_use]
    pub fn is_large_blob(&self) -> bool {
        self.heap_sizes.contains(HeapSizes::LARGE_BLOB)
    }

    /// Width of a `#Strings` index column.
    #[must_use]
    pub fn str_bytes(&self) -> u8 {
        if self.is_large_str() {
            4
        } else {
            2
        }
    }

    /// Width of a `#GUID` index column.
    #[must_use]
    pub fn guid_bytes(&self) -> u8 {
        if self.is_large_guid() {
            4
        } else {
            2
        }
    }

    /// Width of a `#Blob` index column.
    #[must_use]
    pub fn blob_bytes(&self) -> u8 {
        if self.is_large_blob() {
            4
        } else {
            2
        }
    }

    /// Row information of a table.
    #[must_use]
    pub fn get(&self, table: TableId) -> &TableRowInfo {
        &self.rows[table as usize]
    }

    /// Bits needed for the largest row index of `table_id`.
    #[must_use]
    pub fn table_index_bits(&self, table_id: TableId) -> u8 {
        self.rows[table_id as usize].bits
    }

    /// Width of a simple index column into `table_id`.
    #[must_use]
    pub fn table_index_bytes(&self, table_id: TableId) -> u8 {
        if self.rows[table_id as usize].bits > 16 {
            4
        } else {
            2
        }
    }

    /// Width of a coded index column of kind `coded_index_type`.
    ///
    /// Narrow only while every candidate table has fewer than `0xFFFF >> tag_bits` rows.
    #[must_use]
    pub fn coded_index_bytes(&self, coded_index_type: CodedIndexType) -> u8 {
        self.coded_indexes[coded_index_type as usize]
    }

    /// Largest row count among the candidate tables of `coded_index_type`.
    #[must_use]
    pub fn coded_index_max_rows(&self, coded_index_type: CodedIndexType) -> u32 {
        coded_index_type
            .candidates()
            .map(|table| self.rows[table as usize].rows)
            .max()
            .unwrap_or(0)
    }

    /// Verify that `rid` names an existing row of `table` (0 is accepted as null).
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if `rid` exceeds the row count.
    pub fn check_row(&self, table: TableId, rid: u32) -> Result<()> {
        let rows = self.rows[table as usize].rows;
        if rid > rows {
            return Err(Error::InvalidReference { table, rid, rows });
        }

        Ok(())
    }

    /// Verify that `rid` is a valid start of a row range of `table`.
    ///
    /// List columns may point one past the last row to express an empty range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidReference`] if `rid` is 0 or exceeds the row count plus one.
    pub fn check_list(&self, table: TableId, rid: u32) -> Result<()> {
        let rows = self.rows[table as usize].rows;
        if rid == 0 || u64::from(rid) > u64::from(rows) + 1 {
            return Err(Error::InvalidReference { table, rid, rows });
        }

        Ok(())
    }

    fn calculate_coded_index_size(&self, coded_index_type: CodedIndexType) -> u8 {
        let limit = u32::from(u16::MAX) >> coded_index_type.tag_bits();
        if self.coded_index_max_rows(coded_index_type) < limit {
            2
        } else {
            4
        }
    }

    fn calculate_coded_index_widths(&mut self) {
        for coded_index in CodedIndexType::iter() {
            let size = self.calculate_coded_index_size(coded_index);
            self.coded_indexes[coded_index as usize] = size;
        }
    }
}
