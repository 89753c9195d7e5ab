//! Metadata streams and heaps.
//!
//! The metadata root of a .NET image is followed by a directory of named streams. This module
//! parses each of them:
//!
//! | Stream     | Type              | Content                                         |
//! |------------|-------------------|-------------------------------------------------|
//! | `#~`       | [`TablesHeader`]  | the compressed metadata tables                  |
//! | `#Strings` | [`Strings`]       | UTF-8 identifiers, addressed by byte offset     |
//! | `#US`      | [`UserStrings`]   | UTF-16 string literals, addressed by byte offset|
//! | `#GUID`    | [`Guid`]          | 16-byte GUIDs, addressed by one-based index     |
//! | `#Blob`    | [`Blob`]          | length-prefixed binary data, by byte offset     |
//!
//! All heap views borrow the image bytes. Lookups of the byte-addressed heaps are cached per
//! offset in a concurrent map, so a shared image can be dereferenced from several threads.
//!
//! # Reference
//! - [ECMA-335 II.24.2](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

mod blob;
mod guid;
mod streamheader;
mod strings;
mod tablesheader;
mod userstrings;

pub use blob::{Blob, BlobIterator};
pub use guid::{Guid, GUID_SIZE};
pub use streamheader::{StreamHeader, STREAM_NAMES};
pub use strings::{Strings, StringsIterator};
pub use tablesheader::{TableSummary, TablesHeader, SORTED_MASK, TABLES_HEADER_SIZE};
pub use userstrings::{UserStrings, UserStringsIterator};

/// Returns true if `rest` is only the zero padding that aligns a heap to 4 bytes.
pub(crate) fn is_padding(rest: &[u8]) -> bool {
    rest.len() < 4 && rest.iter().all(|byte| *byte == 0)
}
