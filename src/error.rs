/// Crate-level error types for stimref diagnostics.
use std::path::PathBuf;

/// All errors in stimref carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the file or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scan artifact exists but cannot be parsed into a `ScanResult`.
    #[error("cache corrupt: {reason}")]
    CacheCorrupt {
        /// Description of the corruption.
        reason: String,
    },

    /// Expected scan artifact does not exist on disk.
    #[error("cache not found: {}", path.display())]
    CacheNotFound {
        /// Path to the missing artifact.
        path: PathBuf,
    },

    /// A discovered source file disappeared or cannot be read.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the unreadable file.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped serde_json error.
        #[from]
        serde_json::Error,
    ),

    /// Config TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// An export format other than `json` or `dot` was requested.
    #[error("unknown export format: `{format}`")]
    UnknownFormat {
        /// The format string that was not recognized.
        format: String,
    },

    /// The filesystem watcher could not be created or attached.
    #[error("watch setup failed: {reason}")]
    WatchSetup {
        /// Description of the watcher failure.
        reason: String,
    },
}
