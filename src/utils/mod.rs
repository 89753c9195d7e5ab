//! Utility functions shared across the crate.
//!
//! - [`compressed`] - the ECMA-335 compressed integer codec
//! - [`math`] - alignment, tag-width and narrowing helpers

pub mod compressed;
pub mod math;

pub use compressed::{
    compressed_uint_size, read_compressed_int, read_compressed_uint, write_compressed_int,
    write_compressed_uint,
};
pub use math::{align_to, bits_for, to_u32};
