//! The authoritative set of open windows and the interaction slot.

use crate::config::Config;
use crate::models::{DeviceClass, ManagerState, Mode, Point, Size, Viewport, Window, WindowId};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub windows: Vec<Window>,
    pub viewport: Viewport,
    pub mode: Mode,
    pub device: DeviceClass,
    pub min_size: Size,
    /// Pointer position captured when the current drag/resize began.
    pub(crate) pointer_start: Option<Point>,
    last_id: u64,
    last_z: u32,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            windows: Vec::new(),
            viewport: config.viewport(),
            mode: Mode::Normal,
            device: config.device_class(),
            min_size: config.min_window_size(),
            pointer_start: None,
            last_id: 0,
            last_z: 0,
        }
    }

    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// The focused window is the one with the maximum stacking rank. Focus
    /// is undefined only while no windows are open; deriving it from z
    /// means closing the top window hands focus to the next one down with
    /// no bookkeeping.
    #[must_use]
    pub fn focused_window(&self) -> Option<&Window> {
        self.windows.iter().max_by_key(|w| w.z)
    }

    /// One render pass: visible windows in ascending stacking order.
    #[must_use]
    pub fn render_set(&self) -> ManagerState {
        ManagerState::from(self)
    }

    /// Ids strictly increase across opens, so stacking order matches open
    /// order until an explicit focus change.
    pub(crate) fn next_id(&mut self) -> WindowId {
        self.last_id += 1;
        WindowId(self.last_id)
    }

    pub(crate) fn next_z(&mut self) -> u32 {
        self.last_z += 1;
        self.last_z
    }

    /// Drop the active drag/resize if it targets the given window. Called
    /// when that window is closed, minimized, or sent fullscreen mid
    /// interaction.
    pub(crate) fn cancel_interaction_on(&mut self, id: WindowId) {
        if self.mode.window() == Some(id) {
            if let Some(window) = self.window_mut(id) {
                window.start_rect = None;
            }
            self.pointer_start = None;
            self.mode = Mode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{AppKind, Manager};

    #[test]
    fn ids_should_be_unique_across_opens() {
        let mut manager = Manager::new_test();
        let mut ids: Vec<_> = (0..8).map(|_| manager.open(AppKind::Notes)).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn focus_should_be_undefined_with_no_windows() {
        let manager = Manager::new_test();
        assert!(manager.state.focused_window().is_none());
    }
}
