use thiserror::Error;

use crate::metadata::tables::{CodedIndexType, TableId};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Reading
/// - [`Error::Malformed`] - Structural inconsistency in the metadata root, a stream or a heap
/// - [`Error::OutOfBounds`] - Truncated data, a read would run past the end of a region
/// - [`Error::UnknownTable`] - A table tag this crate has no row layout or skip rule for
/// - [`Error::InvalidCodedIndex`] - A coded index whose tag does not name a candidate table
///
/// ## Encoding
/// - [`Error::IntegerRange`] - A value outside the compressed integer (or row index) range
/// - [`Error::NullIndex`] - A zero index was dereferenced where null is not allowed
///
/// ## Writing
/// - [`Error::InvalidReference`] - A row references a row beyond the end of its target table
/// - [`Error::SortOrder`] - An out-of-order append to a sorted table that was already resolved
/// - [`Error::Io`] - The output sink failed
///
/// # Examples
///
/// ```rust
/// use cilmeta::{utils::write_compressed_uint, Error};
///
/// let mut buffer = Vec::new();
/// match write_compressed_uint(0x2000_0000, &mut buffer) {
///     Err(Error::IntegerRange(value)) => assert_eq!(value, 0x2000_0000),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
///
/// # Thread Safety
///
/// This error type is [`std::marker::Send`] and [`std::marker::Sync`], which allows errors
/// produced while dereferencing heaps from worker threads to be passed back to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// The metadata is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the inconsistency
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing or writing.
    ///
    /// Raised by every bounds-checked primitive in [`crate::file::io`] and by the
    /// [`crate::Parser`]; a truncated stream always surfaces as this error.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// A table tag without row layout was encountered.
    ///
    /// Either the `valid` mask of the `#~` header has a bit set above the last known
    /// table (`0x2C`), or a token names such a table.
    #[error("Unknown metadata table - 0x{0:02X}")]
    UnknownTable(u8),

    /// A coded index could not be mapped to a candidate table.
    ///
    /// Raised when decoding a raw value whose tag selects an unused or out-of-range slot,
    /// and when encoding a reference to a table that is not a candidate of the kind.
    #[error("Invalid coded index - {kind:?} cannot encode 0x{value:08X}")]
    InvalidCodedIndex {
        /// The coded index kind that was used
        kind: CodedIndexType,
        /// The raw coded value or the token that was rejected
        value: u32,
    },

    /// A value is outside the representable range.
    ///
    /// Compressed unsigned integers are limited to `0..=0x1FFF_FFFF`, compressed signed
    /// integers to `-0x1000_0000..=0x0FFF_FFFF`, row indices to 24 bits.
    #[error("Value out of range - {0}")]
    IntegerRange(i64),

    /// A zero (null) index was dereferenced in a context that does not allow null.
    #[error("Null index dereferenced - {0}")]
    NullIndex(String),

    /// A row references a row that does not exist in the final image.
    ///
    /// # Fields
    ///
    /// * `table` - The referenced table
    /// * `rid` - The offending one-based row index
    /// * `rows` - The final row count of `table`
    #[error("Invalid reference - {table:?} row {rid} (table has {rows} rows)")]
    InvalidReference {
        /// The referenced table
        table: TableId,
        /// The offending one-based row index
        rid: u32,
        /// The final row count of the table
        rows: u32,
    },

    /// A sorted table received a row that would have to be inserted before rows whose
    /// positions were already handed out.
    #[error("Row out of order for sorted table {0:?}")]
    SortOrder(TableId),

    /// The output sink returned an error.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
