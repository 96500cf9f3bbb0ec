// commands/updates.rs — Version, update check and download hand-off.

use crate::commands::state::AppState;
use desnative_core::UpdateInfo;
use log::info;
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

#[tauri::command]
pub fn get_app_version(state: State<'_, AppState>) -> String {
    state.updates.current_version().to_string()
}

/// `url` overrides the configured descriptor location when non-empty.
#[tauri::command]
pub async fn check_for_updates(
    state: State<'_, AppState>,
    url: Option<String>,
) -> Result<UpdateInfo, String> {
    let url = state.settings.resolve_update_url(url.as_deref());
    Ok(state.updates.check(&url).await?)
}

/// Open the download page in the default browser.
#[tauri::command]
pub fn download_update(app: AppHandle, url: String) -> Result<(), String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("Download URL is empty".into());
    }
    info!("[updates] Opening download URL {}", url);
    app.opener()
        .open_url(url, None::<&str>)
        .map_err(|e| format!("Failed to open {}: {}", url, e))
}
