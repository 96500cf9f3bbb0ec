// commands/history.rs — History backups and export/import.
//
// Dialog-backed commands are async and hop onto a blocking thread; a native
// file dialog must never block the main (event loop) thread.

use crate::commands::state::AppState;
use crate::platform::dialog::DialogPicker;
use desnative_core::{transfer, HistoryFile, StdFilesystem};
use tauri::{AppHandle, State};

/// Save a timestamped backup and rotate old ones.
/// Sweep problems are logged by the core, never returned.
#[tauri::command]
pub fn save_history(state: State<'_, AppState>, content: String) -> Result<(), String> {
    state.history.save(content.as_bytes())?;
    Ok(())
}

#[tauri::command]
pub fn list_history(state: State<'_, AppState>) -> Result<Vec<HistoryFile>, String> {
    Ok(state.history.list()?)
}

/// Newest backup's content, or an empty string when there is none.
#[tauri::command]
pub fn load_latest_history(state: State<'_, AppState>) -> Result<String, String> {
    Ok(transfer::import_as_text(state.history.load_latest()?)?)
}

#[tauri::command]
pub async fn export_history(app: AppHandle, content: String) -> Result<(), String> {
    tauri::async_runtime::spawn_blocking(move || {
        transfer::export_history(&DialogPicker::new(&app), &StdFilesystem, content.as_bytes())
            .map(|_| ())
    })
    .await
    .map_err(|e| format!("Export task failed: {}", e))?
    .map_err(String::from)
}

/// Content of the chosen file, or an empty string if the user cancelled.
#[tauri::command]
pub async fn import_history(app: AppHandle) -> Result<String, String> {
    tauri::async_runtime::spawn_blocking(move || {
        let imported = transfer::import_history(&DialogPicker::new(&app), &StdFilesystem)?;
        transfer::import_as_text(imported)
    })
    .await
    .map_err(|e| format!("Import task failed: {}", e))?
    .map_err(String::from)
}
