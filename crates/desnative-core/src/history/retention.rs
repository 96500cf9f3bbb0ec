// Retention sweep: keep the newest `limit` history files, delete the rest.
//
// Best-effort by contract. A listing, stat or delete failure becomes a
// `SweepWarning`; the sweep never returns an error and never touches
// anything outside `dir`.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::naming::has_history_extension;
use crate::atoms::types::{SweepReport, SweepWarning};
use crate::fs::Filesystem;

/// A member of the retention set with the metadata the ordering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub modified: SystemTime,
    pub len: u64,
}

impl Candidate {
    fn newest_first(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
        b.modified.cmp(&a.modified).then_with(|| b.name.cmp(&a.name))
    }
}

/// Gather the retention set of `dir`, newest first.
///
/// Files that match but cannot be stat'ed are left out of the ordering and
/// recorded in `warnings`. Returns the ordered candidates and how many
/// matching entries were seen in total.
pub(crate) fn collect_candidates<F: Filesystem + ?Sized>(
    fs: &F,
    dir: &Path,
    warnings: &mut Vec<SweepWarning>,
) -> std::io::Result<(Vec<Candidate>, usize)> {
    let mut candidates = Vec::new();
    let mut matched = 0;

    for entry in fs.read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warnings.push(SweepWarning {
                    path: dir.to_path_buf(),
                    message: format!("unreadable directory entry: {}", err),
                });
                continue;
            }
        };
        if entry.is_dir || !has_history_extension(&entry.path) {
            continue;
        }
        matched += 1;

        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match fs.stat(&entry.path) {
            Ok(stat) => candidates.push(Candidate {
                path: entry.path,
                name,
                modified: stat.modified,
                len: stat.len,
            }),
            Err(err) => warnings.push(SweepWarning {
                path: entry.path,
                message: format!("stat failed: {}", err),
            }),
        }
    }

    candidates.sort_by(Candidate::newest_first);
    Ok((candidates, matched))
}

/// Delete every matching file in `dir` beyond the `limit` newest.
///
/// `limit` is clamped to at least 1 so the most recent save always survives.
pub fn sweep<F: Filesystem + ?Sized>(fs: &F, dir: &Path, limit: usize) -> SweepReport {
    let limit = limit.max(1);
    let mut report = SweepReport::default();

    let (candidates, matched) = match collect_candidates(fs, dir, &mut report.warnings) {
        Ok(found) => found,
        Err(err) => {
            warn!("[history] Skipping sweep, cannot list {}: {}", dir.display(), err);
            report.warnings.push(SweepWarning {
                path: dir.to_path_buf(),
                message: format!("listing failed: {}", err),
            });
            return report;
        }
    };
    report.scanned = matched;
    for w in &report.warnings {
        warn!("[history] Leaving {} in place: {}", w.path.display(), w.message);
    }

    for stale in candidates.iter().skip(limit) {
        match fs.remove_file(&stale.path) {
            Ok(()) => {
                debug!("[history] Removed old history file {}", stale.path.display());
                report.removed.push(stale.path.clone());
            }
            Err(err) => {
                warn!("[history] Could not remove {}: {}", stale.path.display(), err);
                report.warnings.push(SweepWarning {
                    path: stale.path.clone(),
                    message: format!("remove failed: {}", err),
                });
            }
        }
    }
    report
}
