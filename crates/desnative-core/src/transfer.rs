// History export / import through a native file picker.
//
// Both directions move the payload verbatim. Cancelling the dialog (no path,
// or an empty one) is a normal outcome and returns `Ok(None)`.

use log::info;
use std::path::PathBuf;

use crate::atoms::constants::{
    EXPORT_DEFAULT_FILE_NAME, EXPORT_DIALOG_TITLE, HISTORY_FILE_EXTENSION, IMPORT_DIALOG_TITLE,
    JSON_FILTER_NAME,
};
use crate::atoms::error::{CoreError, CoreResult};
use crate::fs::Filesystem;

// ── Dialog description ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    /// Extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn json() -> Self {
        Self { name: JSON_FILTER_NAME.to_string(), extensions: vec![HISTORY_FILE_EXTENSION.to_string()] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub title: String,
    pub default_file_name: Option<String>,
    pub filters: Vec<FileFilter>,
}

impl DialogOptions {
    pub fn export() -> Self {
        Self {
            title: EXPORT_DIALOG_TITLE.to_string(),
            default_file_name: Some(EXPORT_DEFAULT_FILE_NAME.to_string()),
            filters: vec![FileFilter::json()],
        }
    }

    pub fn import() -> Self {
        Self {
            title: IMPORT_DIALOG_TITLE.to_string(),
            default_file_name: None,
            filters: vec![FileFilter::json()],
        }
    }
}

// ── Capability ─────────────────────────────────────────────────────────────

/// Native file chooser. `Ok(None)` means the user cancelled.
pub trait FilePicker {
    fn pick_save_path(&self, options: &DialogOptions) -> CoreResult<Option<PathBuf>>;
    fn pick_open_path(&self, options: &DialogOptions) -> CoreResult<Option<PathBuf>>;
}

fn chosen(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

// ── Operations ─────────────────────────────────────────────────────────────

/// Ask for a destination and write `content` there.
/// Returns the path written, or `None` if the user cancelled.
pub fn export_history<P, F>(picker: &P, fs: &F, content: &[u8]) -> CoreResult<Option<PathBuf>>
where
    P: FilePicker + ?Sized,
    F: Filesystem + ?Sized,
{
    let Some(path) = chosen(picker.pick_save_path(&DialogOptions::export())?) else {
        info!("[transfer] Export cancelled");
        return Ok(None);
    };
    fs.write(&path, content)
        .map_err(|e| CoreError::io("Failed to export history to", &path, e))?;
    info!("[transfer] Exported {} bytes to {}", content.len(), path.display());
    Ok(Some(path))
}

/// Ask for a source file and return its bytes, or `None` if the user cancelled.
pub fn import_history<P, F>(picker: &P, fs: &F) -> CoreResult<Option<Vec<u8>>>
where
    P: FilePicker + ?Sized,
    F: Filesystem + ?Sized,
{
    let Some(path) = chosen(picker.pick_open_path(&DialogOptions::import())?) else {
        info!("[transfer] Import cancelled");
        return Ok(None);
    };
    let content = fs
        .read(&path)
        .map_err(|e| CoreError::io("Failed to import history from", &path, e))?;
    info!("[transfer] Imported {} bytes from {}", content.len(), path.display());
    Ok(Some(content))
}

/// Frontend view of an import: cancel becomes an empty string.
pub fn import_as_text(imported: Option<Vec<u8>>) -> CoreResult<String> {
    match imported {
        None => Ok(String::new()),
        Some(bytes) => String::from_utf8(bytes)
            .map_err(|e| CoreError::InvalidInput(format!("imported file is not UTF-8: {}", e))),
    }
}
