// commands/window.rs — Always-on-top pin for the calling window.

use crate::commands::state::AppState;
use crate::platform::window::TauriWindow;
use tauri::{State, WebviewWindow};

#[tauri::command]
pub fn toggle_always_on_top(
    window: WebviewWindow,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    state
        .window
        .lock()
        .toggle_always_on_top(&TauriWindow::new(&window))
        .map_err(String::from)
}

#[tauri::command]
pub fn is_always_on_top(state: State<'_, AppState>) -> bool {
    state.window.lock().is_always_on_top()
}
