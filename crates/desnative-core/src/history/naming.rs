// History file naming: `history_<YYYYMMDD_HHMMSS>.json`.
//
// Second granularity only. Two saves within the same second map to the same
// name and the later write wins.

use chrono::NaiveDateTime;
use std::ffi::OsStr;
use std::path::Path;

use crate::atoms::constants::{
    HISTORY_FILE_EXTENSION, HISTORY_FILE_PREFIX, HISTORY_TIMESTAMP_FORMAT,
};

/// File name for a history save taken at `now`.
pub fn history_file_name(now: NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        HISTORY_FILE_PREFIX,
        now.format(HISTORY_TIMESTAMP_FORMAT),
        HISTORY_FILE_EXTENSION
    )
}

/// Recover the save timestamp from a name produced by [`history_file_name`].
pub fn parse_history_timestamp(name: &str) -> Option<NaiveDateTime> {
    let stamp = name
        .strip_prefix(HISTORY_FILE_PREFIX)?
        .strip_suffix(HISTORY_FILE_EXTENSION)?
        .strip_suffix('.')?;
    NaiveDateTime::parse_from_str(stamp, HISTORY_TIMESTAMP_FORMAT).ok()
}

/// Whether a path belongs to the retention set: the file name ends in
/// `.json`, case-sensitive. A bare `.json` counts. The `history_` prefix is
/// not required.
pub fn has_history_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.strip_suffix(HISTORY_FILE_EXTENSION))
        .is_some_and(|stem| stem.ends_with('.'))
}
