// Window session state: the always-on-top pin.
//
// The flag is owned by whoever manages the window (the Tauri shell keeps one
// `WindowSession` in managed state) and is only committed after the window
// controller accepted the change.

use log::info;

use crate::atoms::error::CoreResult;

/// Host window facility.
pub trait WindowController {
    fn set_always_on_top(&self, on_top: bool) -> CoreResult<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowSession {
    always_on_top: bool,
}

impl WindowSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    /// Flip the pin and return the new state. On controller failure the
    /// session keeps its previous state.
    pub fn toggle_always_on_top<W: WindowController + ?Sized>(&mut self, window: &W) -> CoreResult<bool> {
        self.set_always_on_top(window, !self.always_on_top)
    }

    pub fn set_always_on_top<W: WindowController + ?Sized>(
        &mut self,
        window: &W,
        on_top: bool,
    ) -> CoreResult<bool> {
        window.set_always_on_top(on_top)?;
        self.always_on_top = on_top;
        info!("[window] Always-on-top {}", if on_top { "enabled" } else { "disabled" });
        Ok(on_top)
    }
}
