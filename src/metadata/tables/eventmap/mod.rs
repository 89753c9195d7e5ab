//! EventMap table (ID 0x12).
//!
//! Each row assigns the run of `Event` rows starting at `event_list` to a type. The run ends before
//! the `event_list` of the next row.

mod raw;
mod reader;
mod writer;

pub use raw::*;
