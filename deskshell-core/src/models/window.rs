//! Window Information
#![allow(clippy::module_name_repetitions)]

use super::{AppKind, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one open application instance for its whole lifetime.
/// Assigned monotonically by the manager, never reused while the instance
/// is live.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store window information.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub app: AppKind,
    pub rect: Rect,
    pub z: u32,
    minimized: bool,
    fullscreen: bool,
    saved_rect: Option<Rect>,
    /// Geometry snapshot taken when a drag/resize begins. Interactions are
    /// computed from this snapshot, not from the previous frame, so pointer
    /// deltas never accumulate rounding drift.
    pub(crate) start_rect: Option<Rect>,
}

impl Window {
    #[must_use]
    pub fn new(id: WindowId, app: AppKind, rect: Rect, z: u32) -> Self {
        Self {
            id,
            app,
            rect,
            z,
            minimized: false,
            fullscreen: false,
            saved_rect: None,
            start_rect: None,
        }
    }

    #[must_use]
    pub const fn minimized(&self) -> bool {
        self.minimized
    }

    #[must_use]
    pub const fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub const fn saved_rect(&self) -> Option<Rect> {
        self.saved_rect
    }

    /// Minimized windows leave the render set but keep their geometry for
    /// the eventual restore. Minimizing a fullscreen window drops the
    /// fullscreen state and its snapshot; the window keeps the viewport
    /// geometry it had at that moment.
    pub fn set_minimized(&mut self, value: bool) {
        self.minimized = value;
        if value && self.fullscreen {
            self.fullscreen = false;
            self.saved_rect = None;
        }
    }

    /// Take the given rect, remembering the current geometry so leaving
    /// fullscreen can restore it exactly. No-op if already fullscreen.
    pub fn enter_fullscreen(&mut self, target: Rect) {
        if self.fullscreen {
            return;
        }
        self.saved_rect = Some(self.rect);
        self.rect = target;
        self.fullscreen = true;
        self.minimized = false;
    }

    /// Restore the pre-fullscreen geometry and clear the snapshot. No-op if
    /// not fullscreen.
    pub fn exit_fullscreen(&mut self) {
        if !self.fullscreen {
            return;
        }
        if let Some(saved) = self.saved_rect.take() {
            self.rect = saved;
        }
        self.fullscreen = false;
    }

    /// Push the remembered pre-fullscreen rect below `min_y`, so leaving
    /// fullscreen after a viewport change still lands in the usable area.
    pub(crate) fn clamp_saved_top(&mut self, min_y: i32) {
        if let Some(saved) = self.saved_rect.as_mut() {
            saved.clamp_top(min_y);
        }
    }

    #[must_use]
    pub const fn visible(&self) -> bool {
        !self.minimized
    }

    #[must_use]
    pub const fn can_move(&self) -> bool {
        !self.fullscreen
    }

    #[must_use]
    pub const fn can_resize(&self) -> bool {
        !self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Window {
        Window::new(
            WindowId(1),
            AppKind::Notes,
            Rect::new(100, 100, 800, 600),
            1,
        )
    }

    #[test]
    fn fullscreen_should_round_trip_geometry() {
        let mut subject = subject();
        let before = subject.rect;
        subject.enter_fullscreen(Rect::new(0, 40, 1920, 1040));
        assert!(subject.fullscreen());
        assert_eq!(subject.rect, Rect::new(0, 40, 1920, 1040));
        subject.exit_fullscreen();
        assert!(!subject.fullscreen());
        assert_eq!(subject.rect, before);
        assert_eq!(subject.saved_rect(), None);
    }

    #[test]
    fn entering_fullscreen_should_clear_minimized() {
        let mut subject = subject();
        subject.set_minimized(true);
        subject.enter_fullscreen(Rect::new(0, 40, 1920, 1040));
        assert!(!subject.minimized());
        assert!(subject.fullscreen());
    }

    #[test]
    fn minimizing_should_drop_the_fullscreen_snapshot() {
        let mut subject = subject();
        subject.enter_fullscreen(Rect::new(0, 40, 1920, 1040));
        subject.set_minimized(true);
        assert!(subject.minimized());
        assert!(!subject.fullscreen());
        assert_eq!(subject.saved_rect(), None);
        // The viewport geometry from the fullscreen stint is kept as-is.
        assert_eq!(subject.rect, Rect::new(0, 40, 1920, 1040));
    }
}
