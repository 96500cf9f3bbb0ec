// ── Desnative Atoms: Pure Data Types ───────────────────────────────────────
// Plain structs shared by the core, the Tauri shell and the CLI.
// Anything crossing the WebView boundary serializes in camelCase.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One file of the retention set, as listed for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFile {
    pub name: String,
    pub path: PathBuf,
    /// RFC 3339, local offset.
    pub modified: String,
    pub size: u64,
}

/// A non-fatal problem hit while sweeping old history files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepWarning {
    pub path: PathBuf,
    pub message: String,
}

/// What a retention sweep did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Matching files found, including ones that could not be stat'ed.
    pub scanned: usize,
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<SweepWarning>,
}

/// Result of a successful history save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<SweepWarning>,
}

/// Remote version descriptor, also returned to the frontend after evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateInfo {
    pub available: bool,
    pub version: String,
    pub download_url: String,
    pub release_notes: String,
}
