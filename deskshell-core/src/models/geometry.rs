//! Geometry primitives for window placement. x,y from top left.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A pointer location in viewport coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A window extent in pixels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// The component-wise maximum of two sizes.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            w: std::cmp::max(self.w, other.w),
            h: std::cmp::max(self.h, other.h),
        }
    }
}

/// Struct containing window placement and extent. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// The x coordinate of the east edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// The y coordinate of the south edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= x && x <= max_x) && (self.y <= y && y <= max_y)
    }

    /// Place a rect of the given size centered inside `outer`.
    #[must_use]
    pub const fn centered_in(size: Size, outer: Self) -> Self {
        Self {
            x: outer.x + (outer.w - size.w) / 2,
            y: outer.y + (outer.h - size.h) / 2,
            w: size.w,
            h: size.h,
        }
    }

    /// Push the top edge down to `min_y` if it is above it.
    pub fn clamp_top(&mut self, min_y: i32) {
        if self.y < min_y {
            self.y = min_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_should_center_within_the_outer_rect() {
        let outer = Rect::new(0, 40, 1920, 1040);
        let result = Rect::centered_in(Size::new(800, 600), outer);
        assert_eq!(result, Rect::new(560, 260, 800, 600));
    }

    #[test]
    fn centered_in_should_keep_the_requested_size() {
        let outer = Rect::new(0, 0, 500, 400);
        let result = Rect::centered_in(Size::new(800, 600), outer);
        assert_eq!(result.size(), Size::new(800, 600));
    }

    #[test]
    fn clamp_top_should_only_move_windows_above_the_line() {
        let mut above = Rect::new(100, 10, 400, 300);
        above.clamp_top(40);
        assert_eq!(above.y, 40);

        let mut below = Rect::new(100, 70, 400, 300);
        below.clamp_top(40);
        assert_eq!(below.y, 70);
    }

    #[test]
    fn contains_point_should_include_the_edges() {
        let a = Rect::new(100, 100, 800, 600);
        assert!(a.contains_point(100, 100));
        assert!(a.contains_point(900, 700));
        assert!(!a.contains_point(901, 700));
    }
}
