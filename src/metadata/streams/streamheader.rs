//! Stream headers of the metadata root.
//!
//! Each header names one stream and locates it relative to the start of the metadata root:
//!
//! | Offset | Size | Field    | Description                                              |
//! |--------|------|----------|----------------------------------------------------------|
//! | 0      | 4    | `offset` | Offset of the stream from the start of the metadata root |
//! | 4      | 4    | `size`   | Size of the stream in bytes, a multiple of 4             |
//! | 8      | var  | `name`   | Null-terminated ASCII name, padded to a 4-byte boundary  |
//!
//! # Reference
//! - [ECMA-335 II.24.2.2](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use crate::{
    file::io::{read_le_at, write_le_at, write_bytes_at},
    utils::align_to,
    Error::OutOfBounds,
    Result,
};

/// Names of the streams this crate understands, in the order the writer emits them.
pub const STREAM_NAMES: [&str; 5] = ["#~", "#Strings", "#US", "#GUID", "#Blob"];

/// Longest stream name, including the terminator.
const STREAM_NAME_MAX: usize = 32;

/// A stream header, one entry of the stream directory of the metadata root.
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::streams::StreamHeader;
///
/// let data = [0x6C, 0x00, 0x00, 0x00, 0xA4, 0x45, 0x00, 0x00, b'#', b'~', 0x00, 0x00];
/// let header = StreamHeader::from(&data)?;
///
/// assert_eq!(header.name, "#~");
/// assert_eq!(header.size, 0x45A4);
/// assert_eq!(header.header_size(), 12);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamHeader {
    /// Offset of the stream from the start of the metadata root
    pub offset: u32,
    /// Size of the stream in bytes
    pub size: u32,
    /// Name of the stream, one of [`STREAM_NAMES`]
    pub name: String,
}

impl StreamHeader {
    /// Parse a stream header from the start of `data`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the data ends before the name terminator, and
    /// [`crate::Error::Malformed`] for a name longer than 32 bytes or not in [`STREAM_NAMES`].
    pub fn from(data: &[u8]) -> Result<StreamHeader> {
        let mut offset = 0;
        let stream_offset = read_le_at::<u32>(data, &mut offset)?;
        let size = read_le_at::<u32>(data, &mut offset)?;

        let name_area = &data[8..];
        let Some(length) = name_area
            .iter()
            .take(STREAM_NAME_MAX)
            .position(|&byte| byte == 0)
        else {
            if name_area.len() < STREAM_NAME_MAX {
                return Err(OutOfBounds);
            }
            return Err(malformed_error!("Stream name exceeds {} bytes", STREAM_NAME_MAX));
        };

        let name: String = name_area[..length].iter().map(|&byte| char::from(byte)).collect();
        if !STREAM_NAMES.contains(&name.as_str()) {
            return Err(malformed_error!("Invalid stream header name - {}", name));
        }

        Ok(StreamHeader {
            offset: stream_offset,
            size,
            name,
        })
    }

    /// Size of this header in the stream directory, including name padding.
    #[must_use]
    pub fn header_size(&self) -> usize {
        8 + align_to(self.name.len() + 1, 4)
    }

    /// Encode this header at `offset`, advancing `offset` past the padded name.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `data` is too short.
    pub fn write(&self, data: &mut [u8], offset: &mut usize) -> Result<()> {
        write_le_at(data, offset, self.offset)?;
        write_le_at(data, offset, self.size)?;
        write_bytes_at(data, offset, self.name.as_bytes())?;

        let padding = self.header_size() - 8 - self.name.len();
        for _ in 0..padding {
            write_le_at(data, offset, 0u8)?;
        }

        Ok(())
    }
}
