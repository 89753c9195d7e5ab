//! The metadata root (`BSJB` header) and its stream directory.
//!
//! ```text
//! Offset    Size  Field
//! 0         4     signature, 0x424A5342
//! 4         2     major version, 1
//! 6         2     minor version, 1
//! 8         4     reserved, 0
//! 12        4     length of the version string, padded to 4
//! 16        n     version string, null padded
//! 16+n      2     flags, 0
//! 18+n      2     number of streams
//! 20+n      ...   stream headers
//! ```
//!
//! # Reference
//! - [ECMA-335 II.24.2.1](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

use crate::{
    file::io::{read_le, read_le_at, write_bytes_at, write_le_at},
    metadata::streams::{StreamHeader, STREAM_NAMES},
    utils::{align_to, to_u32},
    Error::OutOfBounds,
    Result,
};

/// Signature of the metadata root, `BSJB` in little-endian.
pub const CIL_HEADER_MAGIC: u32 = 0x424A_5342;

/// Longest version string the root may carry.
pub const VERSION_STRING_MAX: usize = 255;

/// The metadata root.
///
/// # Examples
///
/// ```rust
/// use cilmeta::metadata::{root::Root, streams::StreamHeader};
///
/// let streams = vec![StreamHeader { offset: 0, size: 0, name: "#~".to_string() }];
/// let root = Root::new(1, 1, "v4.0.30319", streams)?;
///
/// let mut data = vec![0u8; root.size()];
/// root.write(&mut data, &mut 0)?;
///
/// let parsed = Root::read(&data)?;
/// assert_eq!(parsed.version, "v4.0.30319");
/// assert_eq!(parsed.length, 12);
/// # Ok::<(), cilmeta::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    /// Magic signature, [`CIL_HEADER_MAGIC`]
    pub signature: u32,
    /// Major version
    pub major_version: u16,
    /// Minor version
    pub minor_version: u16,
    /// Reserved, 0
    pub reserved: u32,
    /// Length of the version string area, including null padding
    pub length: u32,
    /// Runtime version string, without padding
    pub version: String,
    /// Reserved flags, 0
    pub flags: u16,
    /// Number of streams
    pub stream_number: u16,
    /// Directory of the streams following the root
    pub stream_headers: Vec<StreamHeader>,
}

impl Root {
    /// Parse the metadata root and its stream directory.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] for truncated data or a stream region beyond the
    /// data, and [`crate::Error::Malformed`] for a wrong signature, an oversized version
    /// string, a stream count outside `1..=5`, or a duplicate stream name.
    pub fn read(data: &[u8]) -> Result<Root> {
        if data.len() < 20 {
            return Err(OutOfBounds);
        }

        let signature = read_le::<u32>(data)?;
        if signature != CIL_HEADER_MAGIC {
            return Err(malformed_error!(
                "CIL_HEADER_MAGIC does not match - 0x{:08X}",
                signature
            ));
        }

        let length = read_le::<u32>(&data[12..])?;
        if length as usize > align_to(VERSION_STRING_MAX + 1, 4) {
            return Err(malformed_error!("Version string too long - {}", length));
        }

        let version_end = 16 + length as usize;
        let Some(version_bytes) = data.get(16..version_end) else {
            return Err(OutOfBounds);
        };
        let version: String = version_bytes
            .iter()
            .take_while(|&&byte| byte != 0)
            .map(|&byte| char::from(byte))
            .collect();

        let mut offset = version_end;
        let flags = read_le_at::<u16>(data, &mut offset)?;
        let stream_number = read_le_at::<u16>(data, &mut offset)?;
        if stream_number == 0 || stream_number as usize > STREAM_NAMES.len() {
            return Err(malformed_error!("Invalid stream count - {}", stream_number));
        }

        let mut stream_headers: Vec<StreamHeader> = Vec::with_capacity(stream_number as usize);
        for _ in 0..stream_number {
            let Some(entry) = data.get(offset..) else {
                return Err(OutOfBounds);
            };

            let header = StreamHeader::from(entry)?;
            if stream_headers.iter().any(|known| known.name == header.name) {
                return Err(malformed_error!("Duplicate stream - {}", header.name));
            }

            let Some(end) = header.offset.checked_add(header.size) else {
                return Err(malformed_error!(
                    "Stream offset and size cause integer overflow - {} + {}",
                    header.offset,
                    header.size
                ));
            };
            if end as usize > data.len() {
                return Err(OutOfBounds);
            }

            offset += header.header_size();
            stream_headers.push(header);
        }

        Ok(Root {
            signature,
            major_version: read_le::<u16>(&data[4..])?,
            minor_version: read_le::<u16>(&data[6..])?,
            reserved: read_le::<u32>(&data[8..])?,
            length,
            version,
            flags,
            stream_number,
            stream_headers,
        })
    }

    /// Build a root for the writer, with the version string padded to a 4-byte boundary.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for a version string longer than 255 bytes, one
    /// containing a null byte, or more than 5 streams.
    pub fn new(
        major_version: u16,
        minor_version: u16,
        version: &str,
        stream_headers: Vec<StreamHeader>,
    ) -> Result<Root> {
        if version.len() > VERSION_STRING_MAX || version.contains('\0') {
            return Err(malformed_error!("Invalid version string - {:?}", version));
        }
        if stream_headers.len() > STREAM_NAMES.len() {
            return Err(malformed_error!("Too many streams - {}", stream_headers.len()));
        }

        let stream_number = u16::try_from(stream_headers.len())
            .map_err(|_| malformed_error!("Too many streams"))?;

        Ok(Root {
            signature: CIL_HEADER_MAGIC,
            major_version,
            minor_version,
            reserved: 0,
            length: to_u32(align_to(version.len() + 1, 4))?,
            version: version.to_string(),
            flags: 0,
            stream_number,
            stream_headers,
        })
    }

    /// Header of the stream called `name`, if present.
    #[must_use]
    pub fn stream(&self, name: &str) -> Option<&StreamHeader> {
        self.stream_headers.iter().find(|header| header.name == name)
    }

    /// Encoded size of the root including the stream directory.
    #[must_use]
    pub fn size(&self) -> usize {
        20 + self.length as usize
            + self
                .stream_headers
                .iter()
                .map(StreamHeader::header_size)
                .sum::<usize>()
    }

    /// Encode the root and stream directory at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `data` is shorter than [`Root::size`].
    pub fn write(&self, data: &mut [u8], offset: &mut usize) -> Result<()> {
        write_le_at(data, offset, self.signature)?;
        write_le_at(data, offset, self.major_version)?;
        write_le_at(data, offset, self.minor_version)?;
        write_le_at(data, offset, self.reserved)?;
        write_le_at(data, offset, self.length)?;

        let version_start = *offset;
        write_bytes_at(data, offset, self.version.as_bytes())?;
        while *offset < version_start + self.length as usize {
            write_le_at(data, offset, 0u8)?;
        }

        write_le_at(data, offset, self.flags)?;
        write_le_at(data, offset, self.stream_number)?;
        for header in &self.stream_headers {
            header.write(data, offset)?;
        }

        Ok(())
    }
}
