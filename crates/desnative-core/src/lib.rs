//! Core engine library for the Desnative calculator.
//!
//! Everything here is free of any GUI runtime. Host facilities (dialogs,
//! windows, HTTP) are reached through the capability traits in [`fs`],
//! [`clock`], [`transfer`], [`window`] and [`updates`], so the desktop shell
//! and the CLI share the same logic and tests can swap in fakes.

pub mod atoms;
pub mod clock;
pub mod config;
pub mod fs;
pub mod history;
pub mod transfer;
pub mod updates;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use atoms::error::{CoreError, CoreResult};
pub use atoms::types::{HistoryFile, SaveOutcome, SweepReport, SweepWarning, UpdateInfo};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppPaths, Settings};
pub use fs::{DirEntryInfo, FileStat, Filesystem, StdFilesystem};
pub use history::HistoryManager;
pub use transfer::{export_history, import_as_text, import_history, DialogOptions, FileFilter, FilePicker};
pub use updates::{is_newer, HttpUpdateSource, UpdateChecker, UpdateSource};
pub use window::{WindowController, WindowSession};
