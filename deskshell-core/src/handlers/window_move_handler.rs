use crate::config::Config;
use crate::models::{Manager, Mode, Point, Window, WindowId};

impl<C: Config> Manager<C> {
    /// Start dragging a window from the given pointer position. Refused
    /// while another interaction is active, for unknown ids, and for
    /// fullscreen windows.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        if self.state.mode != Mode::Normal {
            return false;
        }
        if !matches!(self.state.window(id), Some(window) if window.can_move()) {
            return false;
        }
        if let Some(window) = self.state.window_mut(id) {
            window.start_rect = Some(window.rect);
        }
        self.state.pointer_start = Some(pointer);
        self.state.mode = Mode::Dragging(id);
        true
    }

    /// Apply one pointer-move event to the active drag. The new position
    /// is computed from the begin-time snapshot plus the total pointer
    /// delta, then the top edge is clamped to the reserved margin. Windows
    /// may leave the viewport on the left/right/bottom by design.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        let Mode::Dragging(id) = self.state.mode else {
            return false;
        };
        let Some(start_pointer) = self.state.pointer_start else {
            return false;
        };
        let reserved_top = self.state.viewport.reserved_top;
        match self.state.window_mut(id) {
            Some(window) => {
                process_window(window, start_pointer, pointer, reserved_top);
                true
            }
            None => false,
        }
    }

    /// Release the drag, keeping whatever geometry the last update
    /// produced. There is no cancel-and-revert path.
    pub fn end_drag(&mut self) -> bool {
        let Mode::Dragging(id) = self.state.mode else {
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

fn process_window(window: &mut Window, start_pointer: Point, pointer: Point, reserved_top: i32) {
    let Some(start) = window.start_rect else {
        return;
    };
    let delta = pointer - start_pointer;
    window.rect.x = start.x + delta.x;
    window.rect.y = std::cmp::max(reserved_top, start.y + delta.y);
}
