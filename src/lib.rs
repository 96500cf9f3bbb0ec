// Desnative — Tauri shell.
//
// Registers plugins and managed state, then exposes the core operations to
// the frontend as commands. All behaviour lives in desnative-core; the
// platform/ adapters connect it to Tauri windows and dialogs.

mod commands;
mod platform;

use commands::state::AppState;
use log::info;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_log::Builder::new()
            .target(tauri_plugin_log::Target::new(
                tauri_plugin_log::TargetKind::LogDir { file_name: Some("desnative".into()) },
            ))
            .level(log::LevelFilter::Info)
            .max_file_size(5_000_000) // 5MB max per log file
            .build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let state = AppState::init()?;
            info!("[startup] Desnative build {}", state.updates.current_version());
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::window::toggle_always_on_top,
            commands::window::is_always_on_top,
            commands::history::save_history,
            commands::history::list_history,
            commands::history::load_latest_history,
            commands::history::export_history,
            commands::history::import_history,
            commands::updates::get_app_version,
            commands::updates::check_for_updates,
            commands::updates::download_update
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
