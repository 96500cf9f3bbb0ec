use desnative_core::{CoreError, CoreResult, WindowController};
use tauri::{Runtime, WebviewWindow};

/// `WindowController` over a live Tauri webview window.
pub struct TauriWindow<'a, R: Runtime> {
    window: &'a WebviewWindow<R>,
}

impl<'a, R: Runtime> TauriWindow<'a, R> {
    pub fn new(window: &'a WebviewWindow<R>) -> Self {
        Self { window }
    }
}

impl<R: Runtime> WindowController for TauriWindow<'_, R> {
    fn set_always_on_top(&self, on_top: bool) -> CoreResult<()> {
        self.window
            .set_always_on_top(on_top)
            .map_err(|e| CoreError::Window(format!("{}: {}", self.window.label(), e)))
    }
}
