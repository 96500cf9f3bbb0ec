// ── Desnative Atoms: Constants ─────────────────────────────────────────────
// Every named constant for the workspace lives here so the file layout and
// wire defaults can be audited in one place.

// ── On-disk layout ─────────────────────────────────────────────────────────
// `~/.desnative/history/history_YYYYMMDD_HHMMSS.json`. Renaming any of these
// orphans history written by older builds.
pub const APP_DIR_NAME: &str = ".desnative";
pub const HISTORY_DIR_NAME: &str = "history";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Environment override for the application directory (tests, portable installs).
pub const APP_HOME_ENV: &str = "DESNATIVE_HOME";
/// Environment override for the update descriptor URL.
pub const UPDATE_URL_ENV: &str = "DESNATIVE_UPDATE_URL";

// ── History retention ──────────────────────────────────────────────────────
/// Maximum number of history backup files kept after each save.
pub const MAX_HISTORY_FILES: usize = 5;
pub const HISTORY_FILE_PREFIX: &str = "history_";
/// Matched case-sensitively against the file extension.
pub const HISTORY_FILE_EXTENSION: &str = "json";
/// chrono format for the timestamp part of a history file name.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// ── Export / import dialogs ────────────────────────────────────────────────
pub const EXPORT_DEFAULT_FILE_NAME: &str = "calculator_history.json";
pub const EXPORT_DIALOG_TITLE: &str = "Export History";
pub const IMPORT_DIALOG_TITLE: &str = "Import History";
pub const JSON_FILTER_NAME: &str = "JSON Files (*.json)";

// ── Updates ────────────────────────────────────────────────────────────────
/// Build number compared against the remote descriptor's `version`.
/// Set `DESNATIVE_BUILD_NUMBER` at compile time to override.
pub const APP_VERSION: &str = match option_env!("DESNATIVE_BUILD_NUMBER") {
    Some(v) => v,
    None => "112",
};
pub const DEFAULT_UPDATE_URL: &str = "https://Lolkid360.github.io/desnative/version.json";
pub const UPDATE_CHECK_TIMEOUT_SECS: u64 = 15;
