//! PropertyMap table (ID 0x15), the property counterpart of the EventMap table.

mod raw;
mod reader;
mod writer;

pub use raw::*;
