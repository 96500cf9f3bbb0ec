// Native file dialogs via tauri-plugin-dialog.
//
// Uses the blocking API, so call only from a worker thread
// (see commands/history.rs).

use desnative_core::{CoreError, CoreResult, DialogOptions, FilePicker};
use std::path::PathBuf;
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, FileDialogBuilder, FilePath};

pub struct DialogPicker<'a, R: Runtime> {
    app: &'a AppHandle<R>,
}

impl<'a, R: Runtime> DialogPicker<'a, R> {
    pub fn new(app: &'a AppHandle<R>) -> Self {
        Self { app }
    }

    fn builder(&self, options: &DialogOptions) -> FileDialogBuilder<R> {
        let mut builder = self.app.dialog().file().set_title(options.title.as_str());
        for filter in &options.filters {
            let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
            builder = builder.add_filter(filter.name.as_str(), &extensions);
        }
        if let Some(name) = &options.default_file_name {
            builder = builder.set_file_name(name.as_str());
        }
        builder
    }
}

fn into_path(chosen: Option<FilePath>) -> CoreResult<Option<PathBuf>> {
    chosen
        .map(|p| p.into_path().map_err(|e| CoreError::Dialog(e.to_string())))
        .transpose()
}

impl<R: Runtime> FilePicker for DialogPicker<'_, R> {
    fn pick_save_path(&self, options: &DialogOptions) -> CoreResult<Option<PathBuf>> {
        into_path(self.builder(options).blocking_save_file())
    }

    fn pick_open_path(&self, options: &DialogOptions) -> CoreResult<Option<PathBuf>> {
        into_path(self.builder(options).blocking_pick_file())
    }
}
