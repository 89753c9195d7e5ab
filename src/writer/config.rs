//! Writer configuration.
//!
//! The writer has nothing to decide about layout; everything it takes from the caller is the
//! handful of version fields that end up in the metadata root and the `#~` header.

/// Version fields of the serialized image.
///
/// ```rust
/// use cilmeta::WriterConfig;
///
/// let config = WriterConfig::default().with_version("v4.0.30319");
/// assert_eq!(config.tables_major_version, 2);
/// assert_eq!(WriterConfig::clr2().version, "v2.0.50727");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Major version of the metadata root (always 1 in practice)
    pub root_major_version: u16,
    /// Minor version of the metadata root (always 1 in practice)
    pub root_minor_version: u16,
    /// Runtime version string stored in the metadata root, at most 255 bytes
    pub version: String,
    /// Major version of the `#~` schema
    pub tables_major_version: u8,
    /// Minor version of the `#~` schema
    pub tables_minor_version: u8,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            root_major_version: 1,
            root_minor_version: 1,
            version: "v4.0.30319".to_string(),
            tables_major_version: 2,
            tables_minor_version: 0,
        }
    }
}

impl WriterConfig {
    /// Configuration of an image targeting the 2.0 runtime.
    #[must_use]
    pub fn clr2() -> Self {
        Self {
            version: "v2.0.50727".to_string(),
            ..Self::default()
        }
    }

    /// Set the runtime version string.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the metadata root version.
    #[must_use]
    pub fn with_root_version(mut self, major: u16, minor: u16) -> Self {
        self.root_major_version = major;
        self.root_minor_version = minor;
        self
    }

    /// Set the `#~` schema version.
    #[must_use]
    pub fn with_tables_version(mut self, major: u8, minor: u8) -> Self {
        self.tables_major_version = major;
        self.tables_minor_version = minor;
        self
    }
}
