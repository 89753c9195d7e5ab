//! Byte-level access to metadata regions.
//!
//! - [`io`] - bounds-checked little-endian reads and writes of primitive values, including the
//!   2-or-4 byte "dynamic" columns used by every table index and heap index
//! - [`parser`] - a forward cursor over a byte slice, used for the metadata root, the stream
//!   directory and the heaps

pub mod io;
pub mod parser;
