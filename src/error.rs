//! Crate-level error types for swordlink diagnostics.

use std::path::PathBuf;

/// All errors in swordlink carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the link, file, or reason for failure.
#[allow(clippy::error_impl_error, reason = "crate-wide error type")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization of a report failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// The directory given to `scan` does not exist.
    #[error("scan root not found: {}", path.display())]
    RootNotFound {
        /// Path that was asked for.
        path: PathBuf,
    },

    /// `.swordlink.toml` exists but is not valid.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// The link has an unknown protocol or no reference after it.
    #[error("unrecognized reference: `{uri}`")]
    UnrecognizedReference {
        /// Link text as given.
        uri: String,
    },
}
