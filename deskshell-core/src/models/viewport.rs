use super::Rect;
use serde::{Deserialize, Serialize};

/// The browser viewport the shell renders into, plus the status bar height
/// below which no window's top edge may be dragged or resized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct Viewport {
    pub w: i32,
    pub h: i32,
    pub reserved_top: i32,
}

impl Viewport {
    #[must_use]
    pub const fn new(w: i32, h: i32, reserved_top: i32) -> Self {
        Self { w, h, reserved_top }
    }

    /// The area available to windows: the viewport minus the status bar.
    /// Fullscreen windows take exactly this rect.
    #[must_use]
    pub const fn usable(&self) -> Rect {
        Rect {
            x: 0,
            y: self.reserved_top,
            w: self.w,
            h: self.h - self.reserved_top,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            w: 1920,
            h: 1080,
            reserved_top: 40,
        }
    }
}

/// Selects which default-size table applies.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}
