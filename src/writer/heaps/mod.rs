//! Heap builders of the writer.
//!
//! Each builder accumulates the content of one heap during the accumulation phase and hands out
//! the final index of an entry the moment it is added. Entries are deduplicated by content, laid
//! out in insertion order, and never move, so an index stays valid for the rest of the build.
//!
//! | Builder                  | Stream     | Index                  |
//! |--------------------------|------------|------------------------|
//! | [`StringHeapBuilder`]    | `#Strings` | byte offset, 0 = empty |
//! | [`UserStringHeapBuilder`]| `#US`      | byte offset            |
//! | [`GuidHeapBuilder`]      | `#GUID`    | one-based slot, 0 = none |
//! | [`BlobHeapBuilder`]      | `#Blob`    | byte offset, 0 = empty |
//!
//! A builder records whether it was ever asked for an index. Heaps that were never accessed are
//! left out of the stream directory.

mod blobs;
mod guids;
mod strings;
mod userstrings;

pub use blobs::BlobHeapBuilder;
pub use guids::GuidHeapBuilder;
pub use strings::StringHeapBuilder;
pub use userstrings::UserStringHeapBuilder;

use crate::Result;

/// Common interface of the heap builders, used when laying out the streams.
pub trait HeapBuilder {
    /// Produce the final bytes of the heap, including trailing padding.
    ///
    /// # Errors
    /// Returns an error if the heap cannot be represented.
    fn build(&self) -> Result<Vec<u8>>;

    /// Size of the heap as it will be written, padding included.
    ///
    /// This is the size the heap width flags of the `#~` header are derived from.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the heap exceeds the 32-bit offset range.
    fn calculate_size(&self) -> Result<u64>;

    /// Name of the stream holding this heap.
    fn heap_name(&self) -> &'static str;

    /// Returns true once any index was requested from this heap.
    fn is_accessed(&self) -> bool;
}
