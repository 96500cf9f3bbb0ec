// Application paths and user settings.
//
// Layout (all under the app directory, `~/.desnative` unless DESNATIVE_HOME
// is set):
//   history/        rotated history backups
//   settings.json   user settings (camelCase JSON)
//
// A missing or corrupt settings file never blocks startup: it is logged and
// defaults are used.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::atoms::constants::{
    APP_DIR_NAME, APP_HOME_ENV, DEFAULT_UPDATE_URL, HISTORY_DIR_NAME, SETTINGS_FILE_NAME,
    UPDATE_URL_ENV,
};
use crate::atoms::error::{CoreError, CoreResult};

// ── Paths ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// `$DESNATIVE_HOME`, else `~/.desnative`.
    pub fn resolve() -> CoreResult<Self> {
        if let Some(root) = std::env::var_os(APP_HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::from_root(root));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Config("Cannot find home directory".into()))?;
        Ok(Self::from_root(home.join(APP_DIR_NAME)))
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR_NAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }
}

// ── Settings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Overrides the built-in update descriptor URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_url: Option<String>,
}

impl Settings {
    /// Settings file plus environment overrides.
    pub fn load(paths: &AppPaths) -> Self {
        let mut settings = Self::load_from(&paths.settings_path());
        if let Ok(url) = std::env::var(UPDATE_URL_ENV) {
            settings.apply_update_url_override(&url);
        }
        settings
    }

    /// Read one settings file, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("[config] No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("[config] Cannot read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("[config] Ignoring corrupt {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, paths: &AppPaths) -> CoreResult<()> {
        let root = paths.root();
        std::fs::create_dir_all(root)
            .map_err(|e| CoreError::io("Failed to create app directory", root, e))?;
        let path = paths.settings_path();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| CoreError::io("Failed to write settings", &path, e))
    }

    fn apply_update_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.update_url = Some(url.to_string());
        }
    }

    /// Descriptor URL: explicit request, then settings, then the built-in default.
    pub fn resolve_update_url(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .or(self.update_url.as_deref().map(str::trim).filter(|u| !u.is_empty()))
            .unwrap_or(DEFAULT_UPDATE_URL)
            .to_string()
    }
}
