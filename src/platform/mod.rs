// Platform adapters — Tauri implementations of the core capability traits.

pub mod dialog;
pub mod window;
