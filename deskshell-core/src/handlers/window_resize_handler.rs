use crate::config::Config;
use crate::models::{Manager, Mode, Point, ResizeEdge, Size, Window, WindowId};
use std::cmp;

impl<C: Config> Manager<C> {
    /// Start resizing a window from one of its edges or corners. Refused
    /// while another interaction is active, for unknown ids, and for
    /// fullscreen windows.
    pub fn begin_resize(&mut self, id: WindowId, edge: ResizeEdge, pointer: Point) -> bool {
        if self.state.mode != Mode::Normal {
            return false;
        }
        if !matches!(self.state.window(id), Some(window) if window.can_resize()) {
            return false;
        }
        if let Some(window) = self.state.window_mut(id) {
            window.start_rect = Some(window.rect);
        }
        self.state.pointer_start = Some(pointer);
        self.state.mode = Mode::Resizing(id, edge);
        true
    }

    /// Apply one pointer-move event to the active resize. The edge under
    /// the pointer follows it while the opposite edge stays fixed; the
    /// minimum size is enforced on every update, and the north edge cannot
    /// pass the reserved top margin.
    pub fn update_resize(&mut self, pointer: Point) -> bool {
        let Mode::Resizing(id, edge) = self.state.mode else {
            return false;
        };
        let Some(start_pointer) = self.state.pointer_start else {
            return false;
        };
        let min_size = self.state.min_size;
        let reserved_top = self.state.viewport.reserved_top;
        match self.state.window_mut(id) {
            Some(window) => {
                process_window(window, edge, start_pointer, pointer, min_size, reserved_top);
                true
            }
            None => false,
        }
    }

    /// Release the resize, keeping the last computed geometry.
    pub fn end_resize(&mut self) -> bool {
        let Mode::Resizing(id, _) = self.state.mode else {
            return false;
        };
        if let Some(window) = self.state.window_mut(id) {
            window.start_rect = None;
        }
        self.state.pointer_start = None;
        self.state.mode = Mode::Normal;
        true
    }
}

fn process_window(
    window: &mut Window,
    edge: ResizeEdge,
    start_pointer: Point,
    pointer: Point,
    min_size: Size,
    reserved_top: i32,
) {
    let Some(start) = window.start_rect else {
        return;
    };
    let delta = pointer - start_pointer;
    let mut rect = start;

    if edge.has_east() {
        rect.w = cmp::max(min_size.w, start.w + delta.x);
    }
    if edge.has_west() {
        // The east edge stays fixed: when the minimum clamps the width,
        // the origin stops moving instead of the window teleporting.
        rect.w = cmp::max(min_size.w, start.w - delta.x);
        rect.x = start.right() - rect.w;
    }
    if edge.has_south() {
        rect.h = cmp::max(min_size.h, start.h + delta.y);
    }
    if edge.has_north() {
        rect.h = cmp::max(min_size.h, start.h - delta.y);
        rect.y = start.bottom() - rect.h;
        if rect.y < reserved_top {
            // The top edge stops at the status bar; the south edge is the
            // fixed point, so give back the overshoot as height.
            rect.y = reserved_top;
            rect.h = start.bottom() - reserved_top;
        }
    }

    window.rect = rect;
}
