//! History retention manager.
//!
//! Every save writes the caller's payload verbatim to a new
//! `history_<timestamp>.json` file, then sweeps the directory down to the
//! newest [`MAX_HISTORY_FILES`] matching files. Only directory creation and
//! the write itself can fail a save; the sweep is best-effort.

mod naming;
mod retention;

pub use naming::{has_history_extension, history_file_name, parse_history_timestamp};
pub use retention::sweep;

use chrono::{DateTime, Local};
use log::info;
use std::io;
use std::path::{Path, PathBuf};

use crate::atoms::constants::MAX_HISTORY_FILES;
use crate::atoms::error::{CoreError, CoreResult};
use crate::atoms::types::{HistoryFile, SaveOutcome};
use crate::clock::{Clock, SystemClock};
use crate::fs::{Filesystem, StdFilesystem};

/// Owns one flat history directory and its retention window.
#[derive(Debug)]
pub struct HistoryManager<F = StdFilesystem, C = SystemClock> {
    fs: F,
    clock: C,
    dir: PathBuf,
    limit: usize,
}

impl HistoryManager {
    /// Manager over the real filesystem and local clock, keeping
    /// [`MAX_HISTORY_FILES`] files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_parts(StdFilesystem, SystemClock, dir, MAX_HISTORY_FILES)
    }
}

impl<F: Filesystem, C: Clock> HistoryManager<F, C> {
    pub fn with_parts(fs: F, clock: C, dir: impl Into<PathBuf>, limit: usize) -> Self {
        Self { fs, clock, dir: dir.into(), limit: limit.max(1) }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Write `content` to a new timestamped file and trim the directory to
    /// the retention window.
    pub fn save(&self, content: &[u8]) -> CoreResult<SaveOutcome> {
        self.fs
            .create_dir_all(&self.dir)
            .map_err(|e| CoreError::io("Failed to create history directory", &self.dir, e))?;

        let path = self.dir.join(history_file_name(self.clock.now()));
        self.fs
            .write(&path, content)
            .map_err(|e| CoreError::io("Failed to write history file", &path, e))?;

        let report = sweep(&self.fs, &self.dir, self.limit);
        info!(
            "[history] Saved {} ({} bytes), removed {} old file(s), {} warning(s)",
            path.display(),
            content.len(),
            report.removed.len(),
            report.warnings.len()
        );

        Ok(SaveOutcome { path, removed: report.removed, warnings: report.warnings })
    }

    /// The retention set, newest first. A missing directory lists as empty.
    pub fn list(&self) -> CoreResult<Vec<HistoryFile>> {
        let mut warnings = Vec::new();
        let candidates = match retention::collect_candidates(&self.fs, &self.dir, &mut warnings) {
            Ok((candidates, _)) => candidates,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CoreError::io("Failed to list history directory", &self.dir, e)),
        };
        for w in &warnings {
            log::warn!("[history] Skipping {}: {}", w.path.display(), w.message);
        }

        Ok(candidates
            .into_iter()
            .map(|c| HistoryFile {
                modified: DateTime::<Local>::from(c.modified).to_rfc3339(),
                name: c.name,
                path: c.path,
                size: c.len,
            })
            .collect())
    }

    /// Verbatim content of the newest history file, if any.
    pub fn load_latest(&self) -> CoreResult<Option<Vec<u8>>> {
        let Some(newest) = self.list()?.into_iter().next() else {
            return Ok(None);
        };
        let content = self
            .fs
            .read(&newest.path)
            .map_err(|e| CoreError::io("Failed to read history file", &newest.path, e))?;
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::testing::MemoryFilesystem;
    use chrono::NaiveDate;

    fn dir() -> PathBuf {
        PathBuf::from("/home/u/.desnative/history")
    }

    fn new_year() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
    }

    fn manager(fs: MemoryFilesystem) -> HistoryManager<MemoryFilesystem, FixedClock> {
        HistoryManager::with_parts(fs, new_year(), dir(), MAX_HISTORY_FILES)
    }

    #[test]
    fn first_save_creates_directory_and_single_file() {
        let fs = MemoryFilesystem::new();
        let mgr = manager(fs.clone());

        let outcome = mgr.save(br#"{"ops":[]}"#).unwrap();

        assert_eq!(outcome.path, dir().join("history_20240101_000000.json"));
        assert!(outcome.removed.is_empty());
        assert!(outcome.warnings.is_empty());
        assert!(fs.is_dir(&dir()));
        assert_eq!(fs.file_names(&dir()), vec!["history_20240101_000000.json"]);
        assert_eq!(fs.contents(&outcome.path).unwrap(), br#"{"ops":[]}"#);
    }

    #[test]
    fn empty_payload_is_written_as_empty_file() {
        let fs = MemoryFilesystem::new();
        let outcome = manager(fs.clone()).save(b"").unwrap();
        assert_eq!(fs.contents(&outcome.path).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn repeated_saves_keep_only_the_newest_window() {
        let fs = MemoryFilesystem::new();
        let mgr = manager(fs.clone());

        let mut written = Vec::new();
        for i in 0..8 {
            written.push(mgr.save(format!("{{\"n\":{}}}", i).as_bytes()).unwrap().path);
            mgr.clock().advance(1);
        }

        let expected: Vec<String> = written[3..]
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(fs.file_names(&dir()), expected);
    }

    #[test]
    fn same_second_save_overwrites() {
        let fs = MemoryFilesystem::new();
        let mgr = manager(fs.clone());

        let first = mgr.save(b"one").unwrap();
        let second = mgr.save(b"two").unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(fs.file_names(&dir()).len(), 1);
        assert_eq!(fs.contents(&second.path).unwrap(), b"two");
    }

    #[test]
    fn populated_directory_is_not_an_error() {
        let fs = MemoryFilesystem::new();
        fs.add_file(dir().join("history_20231231_235959.json"), b"old".to_vec());
        fs.add_file(dir().join("readme.txt"), b"keep".to_vec());

        let outcome = manager(fs.clone()).save(b"new").unwrap();

        assert!(outcome.removed.is_empty());
        assert_eq!(fs.file_names(&dir()).len(), 3);
    }

    #[test]
    fn directory_creation_failure_is_fatal() {
        let fs = MemoryFilesystem::new();
        fs.fail_create_dir(true);

        let err = manager(fs.clone()).save(b"x").unwrap_err();

        assert!(matches!(err, CoreError::Io { context: "Failed to create history directory", .. }));
        assert!(fs.file_names(&dir()).is_empty());
    }

    #[test]
    fn write_failure_is_fatal_and_skips_sweep() {
        let fs = MemoryFilesystem::new();
        for i in 0..7 {
            fs.add_file(dir().join(format!("h{}.json", i)), Vec::new());
        }
        fs.fail_write(true);

        let err = manager(fs.clone()).save(b"x").unwrap_err();

        assert!(matches!(err, CoreError::Io { context: "Failed to write history file", .. }));
        assert_eq!(fs.file_names(&dir()).len(), 7);
    }

    #[test]
    fn sweep_failures_do_not_fail_the_save() {
        let fs = MemoryFilesystem::new();
        for i in 0..6 {
            fs.add_file(dir().join(format!("h{}.json", i)), Vec::new());
        }
        fs.fail_remove(dir().join("h0.json"));

        let outcome = manager(fs.clone()).save(b"x").unwrap();

        // New file + h5..h2 survive the window; h1 removed; h0 stuck.
        assert_eq!(outcome.removed, vec![dir().join("h1.json")]);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(fs.file_names(&dir()).len(), 6);
    }

    #[test]
    fn list_is_newest_first_and_filters_extension() {
        let fs = MemoryFilesystem::new();
        fs.add_file(dir().join("a.json"), b"12".to_vec());
        fs.add_file(dir().join("b.txt"), Vec::new());
        fs.add_file(dir().join("c.json"), b"1234".to_vec());

        let files = manager(fs).list().unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["c.json", "a.json"]);
        assert_eq!(files[0].size, 4);
        assert!(DateTime::parse_from_rfc3339(&files[0].modified).is_ok());
    }

    #[test]
    fn list_of_missing_directory_is_empty() {
        let files = manager(MemoryFilesystem::new()).list().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn load_latest_returns_newest_payload() {
        let fs = MemoryFilesystem::new();
        let mgr = manager(fs);
        assert_eq!(mgr.load_latest().unwrap(), None);

        mgr.save(b"first").unwrap();
        mgr.clock().advance(5);
        mgr.save(b"second").unwrap();

        assert_eq!(mgr.load_latest().unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn limit_is_at_least_one() {
        let mgr = HistoryManager::with_parts(MemoryFilesystem::new(), new_year(), dir(), 0);
        assert_eq!(mgr.limit(), 1);
    }
}
