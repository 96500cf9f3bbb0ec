// ── Desnative Atoms: Error Types ───────────────────────────────────────────
// Single canonical error enum for the core, built with `thiserror`.
//
//   • Variants are coarse-grained by domain (I/O, network, dialog, window…).
//   • `CoreError` → `String` is provided so Tauri command boundaries
//     (`Result<T, String>`) can call `.map_err(String::from)`.
//   • Sweep failures during history retention are never represented here;
//     they are reported as `SweepWarning`s and do not fail a save.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Filesystem or OS-level I/O failure, with the operation and path that failed.
    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport failure (reqwest layer).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The update server answered with a non-success status.
    #[error("Network error: {url} returned HTTP {status}")]
    NetworkStatus { url: String, status: u16 },

    /// Native file dialog failure (not cancellation, which is `Ok(None)`).
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Window controller rejected a state change.
    #[error("Window error: {0}")]
    Window(String),

    /// Configuration is missing or cannot be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller passed something unusable (empty URL, non-UTF-8 import…).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Wrap an `io::Error` with the operation and path it came from.
    pub fn io(context: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io { context, path: path.as_ref().to_path_buf(), source }
    }
}

/// All core operations return this type.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<CoreError> for String {
    fn from(e: CoreError) -> Self {
        e.to_string()
    }
}
