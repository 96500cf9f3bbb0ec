//! Filesystem capability used by history retention and export/import.
//!
//! The trait speaks `std::io` so callers can attach their own context; the
//! retention sweep in particular needs per-entry errors to stay non-fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// The subset of file metadata the core reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub modified: SystemTime,
    pub len: u64,
}

/// Trait for filesystem operations.
/// Abstracted for testing with in-memory implementations.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `data` to `path`, truncating any existing file.
    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// List the direct children of `dir`. A failure to read one entry is
    /// returned in place rather than failing the whole listing.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<DirEntryInfo>>>;

    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// Real filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<DirEntryInfo>>> {
        let entries = fs::read_dir(dir)?
            .map(|entry| {
                let entry = entry?;
                let is_dir = entry.file_type()?.is_dir();
                Ok(DirEntryInfo { path: entry.path(), is_dir })
            })
            .collect();
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = fs::metadata(path)?;
        Ok(FileStat { modified: meta.modified()?, len: meta.len() })
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
