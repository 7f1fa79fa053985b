//! Error types for loading, repairing and writing program files.

use std::path::PathBuf;

/// Error raised by the I/O shell around the repair core.
///
/// The repair rules themselves never fail; only reading, parsing and
/// writing files can.
#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    /// The folder argument does not name a directory.
    #[error("Not a folder: {}", .0.display())]
    NotAFolder(PathBuf),

    /// Filesystem failure.
    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The fixed document could not be turned back into JSON text.
    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parsed but is not a program document.
    #[error("Invalid program document {}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    /// The configuration file is unreadable or malformed.
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl RepairError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        RepairError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
