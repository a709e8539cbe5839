use crate::config::Config;
use crate::models::{AppKind, Manager, Rect, Window, WindowId};

impl<C: Config> Manager<C> {
    /// Open a new instance of an app: fresh id, default size for the
    /// device class, centered in the viewport with the top edge clamped
    /// below the status bar, stacked on top and therefore focused. Unknown
    /// apps still open; the content renderer shows its own "not found"
    /// state.
    pub fn open(&mut self, app: AppKind) -> WindowId {
        let size = self
            .config
            .app_size(&app)
            .max(self.config.min_window_size());
        let viewport = self.state.viewport;
        let mut rect = Rect::centered_in(size, Rect::new(0, 0, viewport.w, viewport.h));
        rect.clamp_top(viewport.reserved_top);

        let id = self.state.next_id();
        let z = self.state.next_z();
        tracing::debug!("open {} as window {} at {:?}", app, id, rect);
        self.state.windows.push(Window::new(id, app, rect, z));
        id
    }

    /// Close a window. No-op for unknown ids: the UI has no recovery
    /// action for a stale reference beyond ignoring it. Focus falls to the
    /// next-highest stacking rank by construction.
    pub fn close(&mut self, id: WindowId) -> bool {
        if self.state.window(id).is_none() {
            tracing::debug!("close ignored for unknown window {}", id);
            return false;
        }
        self.state.cancel_interaction_on(id);
        self.state.windows.retain(|w| w.id != id);
        tracing::debug!("closed window {}", id);
        true
    }

    pub fn close_focused(&mut self) -> bool {
        match self.state.focused_window().map(|w| w.id) {
            Some(id) => self.close(id),
            None => false,
        }
    }

    /// Close every window, as the shell does on logout.
    pub fn close_all(&mut self) -> bool {
        if self.state.windows.is_empty() {
            return false;
        }
        let ids: Vec<WindowId> = self.state.windows.iter().map(|w| w.id).collect();
        for id in ids {
            self.close(id);
        }
        true
    }
}
