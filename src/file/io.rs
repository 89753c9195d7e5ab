//! Bounds-checked little-endian reading and writing of primitive values.
//!
//! Every multi-byte quantity in the metadata root, the `#~` header and the table rows is stored
//! little-endian. Table rows additionally contain "dynamic" columns that are either 2 or 4 bytes
//! wide depending on the size of the referenced table or heap; [`read_le_at_dyn`] and
//! [`write_le_at_dyn`] handle those.
//!
//! All functions return [`crate::Error::OutOfBounds`] instead of panicking when the buffer is
//! too small.
//!
//! # Examples
//!
//! ```rust
//! use cilmeta::file::io::{read_le_at, read_le_at_dyn, write_le_at, write_le_at_dyn};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//! write_le_at(&mut data, &mut offset, 0x0201_u16)?;
//! write_le_at_dyn(&mut data, &mut offset, 0x0605_0403, true)?;
//!
//! let mut offset = 0;
//! assert_eq!(read_le_at::<u16>(&data, &mut offset)?, 0x0201);
//! assert_eq!(read_le_at_dyn(&data, &mut offset, true)?, 0x0605_0403);
//! # Ok::<(), cilmeta::Error>(())
//! ```

use crate::{Error::OutOfBounds, Result};

/// Primitive types that can be read from and written to metadata buffers.
pub trait CilIO: Sized {
    /// Fixed-size byte representation of the type
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Decode from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Encode into little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_cil_io {
    ($($ty:ty),*) => {
        $(
            impl CilIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_cil_io!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Read a `T` from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn read_le<T: CilIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Read a `T` at `offset` and advance `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the value does not fit in the remaining data.
pub fn read_le_at<T: CilIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

/// Read a 2 byte (`is_large == false`) or 4 byte index column and widen it to `u32`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the column does not fit in the remaining data.
pub fn read_le_at_dyn(data: &[u8], offset: &mut usize, is_large: bool) -> Result<u32> {
    let res = if is_large {
        read_le_at::<u32>(data, offset)?
    } else {
        u32::from(read_le_at::<u16>(data, offset)?)
    };

    Ok(res)
}

/// Write `value` at the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than `T`.
pub fn write_le<T: CilIO>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_le_at(data, &mut offset, value)
}

/// Write `value` at `offset` and advance `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the value does not fit in the remaining buffer.
pub fn write_le_at<T: CilIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let bytes = value.to_le_bytes();
    let bytes = bytes.as_ref();

    let Some(end) = offset.checked_add(bytes.len()) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[*offset..end].copy_from_slice(bytes);
    *offset = end;

    Ok(())
}

/// Write a 2 byte (`is_large == false`) or 4 byte index column.
///
/// A narrow column only holds values up to `u16::MAX`; larger values are rejected instead of
/// being truncated.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the column does not fit in the remaining buffer,
/// or [`crate::Error::IntegerRange`] if `value` does not fit a narrow column.
pub fn write_le_at_dyn(
    data: &mut [u8],
    offset: &mut usize,
    value: u32,
    is_large: bool,
) -> Result<()> {
    if is_large {
        write_le_at::<u32>(data, offset, value)?;
    } else {
        let Ok(narrow) = u16::try_from(value) else {
            return Err(crate::Error::IntegerRange(i64::from(value)));
        };
        write_le_at::<u16>(data, offset, narrow)?;
    }

    Ok(())
}

/// Write raw bytes at `offset` and advance `offset` past them.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `bytes` does not fit in the remaining buffer.
pub fn write_bytes_at(data: &mut [u8], offset: &mut usize, bytes: &[u8]) -> Result<()> {
    let Some(end) = offset.checked_add(bytes.len()) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[*offset..end].copy_from_slice(bytes);
    *offset = end;

    Ok(())
}
