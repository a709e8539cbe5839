use crate::models::WindowId;
use crate::state::State;

impl State {
    /// Raise a window above all others, making it focused. No-op for
    /// unknown ids or when the window is already topmost, so repeated
    /// clicks on the top window don't inflate stacking ranks.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        if self.focused_window().map(|w| w.id) == Some(id) {
            return false;
        }
        if self.window(id).is_none() {
            tracing::debug!("focus ignored for unknown window {}", id);
            return false;
        }
        let z = self.next_z();
        if let Some(window) = self.window_mut(id) {
            window.z = z;
        }
        tracing::debug!("focused window {}", id);
        true
    }
}
