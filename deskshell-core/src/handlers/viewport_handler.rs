use crate::config::Config;
use crate::models::{Manager, Viewport};

impl<C: Config> Manager<C> {
    /// Record a browser resize. Fullscreen windows re-take the new usable
    /// area; everyone else is pushed back below the (possibly changed)
    /// reserved top margin. Returns true if anything changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.state.viewport == viewport {
            return false;
        }
        tracing::debug!("viewport changed to {:?}", viewport);
        self.state.viewport = viewport;
        let usable = viewport.usable();
        for window in &mut self.state.windows {
            if window.fullscreen() {
                window.rect = usable;
                window.clamp_saved_top(viewport.reserved_top);
            } else {
                window.rect.clamp_top(viewport.reserved_top);
            }
        }
        true
    }
}
