//! Scan artifact persistence: reading, validation, and serialization of
//! the JSON cache that report commands consume.

use std::path::Path;

use crate::error::Error;
use crate::types::{Binding, ScanResult};

impl ScanResult {
    /// Parse a scan artifact from JSON content.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the content is not a valid artifact,
    /// or `Error::CacheCorrupt` if binding identifiers are malformed or
    /// out of order.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let result: Self = serde_json::from_str(content)?;
        enforce_binding_identifier_ordering(&result.bindings)?;
        return Ok(result);
    }

    /// Read and parse a scan artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::CacheNotFound` if the file doesn't exist,
    /// `Error::Io` for other read failures,
    /// `Error::Json` if the content is invalid,
    /// or `Error::CacheCorrupt` if binding identifiers are out of order.
    pub fn read(path: &Path) -> Result<Self, Error> {
        let content = match std::fs::read_to_string(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::CacheNotFound { path: path.to_path_buf() });
            }
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };
        return Self::parse(&content);
    }

    /// Serialize to pretty-printed JSON, the artifact's on-disk form.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn serialize(&self) -> Result<String, Error> {
        return Ok(serde_json::to_string_pretty(self)?);
    }

    /// Write the scan artifact to disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails,
    /// or `Error::Io` if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let content = self.serialize()?;
        std::fs::write(path, content)?;
        return Ok(());
    }
}

/// Validate that binding identifiers are well-formed `el_NNNN` values in
/// strictly ascending order. Report commands rely on that ordering, so a
/// cache that breaks it is rejected instead of quietly misreported.
fn enforce_binding_identifier_ordering(bindings: &[Binding]) -> Result<(), Error> {
    let mut previous: Option<u32> = None;

    for binding in bindings {
        let ordinal = binding
            .id
            .strip_prefix("el_")
            .and_then(|digits| return digits.parse::<u32>().ok());
        let Some(ordinal) = ordinal else {
            return Err(Error::CacheCorrupt {
                reason: format!("malformed binding identifier: {}", binding.id),
            });
        };
        if previous.is_some_and(|p| return p >= ordinal) {
            return Err(Error::CacheCorrupt {
                reason: format!("binding identifiers not ascending at: {}", binding.id),
            });
        }
        previous = Some(ordinal);
    }

    return Ok(());
}
