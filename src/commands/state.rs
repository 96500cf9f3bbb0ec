// commands/state.rs — Managed application state shared by all commands.

use desnative_core::{
    AppPaths, CoreResult, HistoryManager, Settings, UpdateChecker, WindowSession,
};
use log::info;
use parking_lot::Mutex;

/// Everything the commands need, registered once with `app.manage()`.
pub struct AppState {
    pub paths: AppPaths,
    pub settings: Settings,
    pub history: HistoryManager,
    /// Always-on-top pin for the main window.
    pub window: Mutex<WindowSession>,
    pub updates: UpdateChecker,
}

impl AppState {
    pub fn init() -> CoreResult<Self> {
        Self::from_paths(AppPaths::resolve()?)
    }

    pub fn from_paths(paths: AppPaths) -> CoreResult<Self> {
        let settings = Settings::load(&paths);
        let history = HistoryManager::new(paths.history_dir());
        info!(
            "[state] App dir {}, history dir {}",
            paths.root().display(),
            history.dir().display()
        );
        Ok(Self {
            paths,
            settings,
            history,
            window: Mutex::new(WindowSession::new()),
            updates: UpdateChecker::new()?,
        })
    }
}
