//! # Metadata Table Types Module
//!
//! Shared infrastructure of every metadata table: the table identifiers, the coded index
//! registry, the width calculation of [`TableInfo`] and the row traits that connect a named row
//! struct to its binary layout.
//!
//! ## Key Components
//!
//! - [`RowReadable`] and [`RowWritable`]: binary layout of one row type
//! - [`MetadataTable`]: the decoded rows of one table
//! - [`TableData`]: closed union of every supported table, matched by [`TableId`]
//! - [`CodedIndex`] and [`CodedIndexType`]: tagged references into a candidate set of tables
//! - [`TableInfo`] and [`TableInfoRef`]: row counts, heap widths and every derived column width
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cilmeta::metadata::tables::{HeapSizes, MetadataTable, ModuleRefRaw, TableId, TableInfo};
//!
//! let mut counts = [0u32; 45];
//! counts[TableId::ModuleRef as usize] = 2;
//! let info = Arc::new(TableInfo::from_row_counts(&counts, HeapSizes::empty()));
//!
//! let data = [0x10, 0x00, 0x20, 0x00];
//! let table = MetadataTable::<ModuleRefRaw>::new(&data, 2, &info)?;
//!
//! let names: Vec<u32> = table.iter().map(|row| row.name).collect();
//! assert_eq!(names, vec![0x10, 0x20]);
//! # Ok::<(), cilmeta::Error>(())
//! ```
//!
//! ## References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Partition II, Section 22

mod codedindex;
mod cursor;
mod tableaccess;
mod tabledata;
mod tableid;
mod tableinfo;

use rayon::prelude::*;

use crate::{Error::OutOfBounds, Result};

pub use codedindex::{CodedIndex, CodedIndexType, CodedIndexTypeIter};
#[cfg(test)]
pub(crate) use cursor::{decode_single, encode_single};
pub(crate) use cursor::RowCursor;
pub use tableaccess::TableAccess;
pub(crate) use tableaccess::impl_table_access;
pub use tabledata::{calculate_table_row_size, TableData};
pub use tableid::{TableId, TableIdIter};
pub use tableinfo::{HeapSizes, TableInfo, TableInfoRef, TableRowInfo};

/// Binary layout of a row type, read side.
///
/// Implemented by every named row struct. `row_size` is the width of one row under the column
/// widths of `sizes`, and `row_read` decodes exactly that many bytes.
pub trait RowReadable: Sized + Send {
    /// Size in bytes of one row of this table under `sizes`.
    fn row_size(sizes: &TableInfoRef) -> u32;

    /// Decode one row starting at `offset`, advancing `offset` past it.
    ///
    /// `rid` is the one-based row index the row is assigned.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] on truncated data and
    /// [`crate::Error::InvalidCodedIndex`] if a coded index column selects no table.
    fn row_read(data: &[u8], offset: &mut usize, rid: u32, sizes: &TableInfoRef) -> Result<Self>;
}

/// Binary layout of a row type, write side.
///
/// `row_write` validates every reference of the row against the final row counts held in
/// `sizes` before encoding it, so a row pointing past the end of its target table never reaches
/// the output.
pub trait RowWritable: RowReadable {
    /// The table this row type belongs to.
    const TABLE_ID: TableId;

    /// Encode this row at `offset`, advancing `offset` past it.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::Error::InvalidReference`] for an index beyond its target table,
    /// [`crate::Error::InvalidCodedIndex`] for a coded index whose table is not a candidate,
    /// and [`crate::Error::IntegerRange`] for a value that does not fit its column.
    fn row_write(
        &self,
        data: &mut [u8],
        offset: &mut usize,
        rid: u32,
        sizes: &TableInfoRef,
    ) -> Result<()>;

    /// Check the columns that do not depend on final row counts.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::Error::InvalidCodedIndex`] for a coded index whose table is not a
    /// candidate of its column.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Ordering key of the owner column for tables that must be kept sorted.
    ///
    /// `None` for tables without an ordering requirement. For sorted tables the key is the
    /// encoded owner column, optionally refined by a secondary column in the low 32 bits.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::Error::InvalidCodedIndex`] if the owner column cannot be encoded.
    fn sort_key(&self) -> Result<Option<u64>> {
        Ok(None)
    }
}

/// The decoded rows of one metadata table.
///
/// Rows are decoded eagerly when the table is constructed, so a table that exists has been
/// checked in full. Row access uses the one-based row indices of the format.
pub struct MetadataTable<T> {
    rows: Vec<T>,
    row_size: u32,
}

impl<T: RowReadable> MetadataTable<T> {
    /// Decode `row_count` rows from the start of `data`.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `row_count` rows, and any
    /// error of [`RowReadable::row_read`].
    pub fn new(data: &[u8], row_count: u32, sizes: &TableInfoRef) -> Result<Self> {
        let row_size = T::row_size(sizes);
        let Some(table_size) = (row_count as usize).checked_mul(row_size as usize) else {
            return Err(OutOfBounds);
        };
        if table_size > data.len() {
            return Err(OutOfBounds);
        }

        let mut rows = Vec::with_capacity(row_count as usize);
        let mut offset = 0;
        for rid in 1..=row_count {
            rows.push(T::row_read(data, &mut offset, rid, sizes)?);
        }

        Ok(MetadataTable { rows, row_size })
    }

    /// Total size of the table in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.rows.len() as u64 * u64::from(self.row_size)
    }

    /// Size of a single row in bytes.
    #[must_use]
    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    /// Number of rows.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Row by one-based index, `None` for 0 or past the end.
    #[must_use]
    pub fn get(&self, rid: u32) -> Option<&T> {
        if rid == 0 {
            return None;
        }

        self.rows.get(rid as usize - 1)
    }

    /// Iterate the rows in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// Iterate the rows in parallel.
    ///
    /// ```rust,ignore
    /// table.par_iter().try_for_each(|row| bind(row))?;
    /// ```
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, T>
    where
        T: Sync,
    {
        self.rows.par_iter()
    }
}

impl<'a, T: RowReadable> IntoIterator for &'a MetadataTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MetadataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataTable")
            .field("row_size", &self.row_size)
            .field("rows", &self.rows.len())
            .finish()
    }
}
