use crate::command::Command;
use crate::config::Config;
use crate::models::Manager;
use crate::models::WindowId;
use crate::state::State;

impl<C: Config> Manager<C> {
    /// Processes a command and invokes the associated function. Returns
    /// true if the state changed and a render pass is needed.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        match command {
            Command::Open(app) => {
                self.open(app.clone());
                true
            }
            Command::Close(id) => self.close(*id),
            Command::CloseFocused => self.close_focused(),
            Command::CloseAll => self.close_all(),
            Command::Focus(id) => self.state.focus_window(*id),
            Command::Minimize(id) => minimize(&mut self.state, *id),
            Command::Restore(id) => restore(&mut self.state, *id),
            Command::ToggleFullscreen(id) => toggle_fullscreen(&mut self.state, *id),
        }
    }
}

fn minimize(state: &mut State, id: WindowId) -> bool {
    if state.window(id).is_none() {
        return false;
    }
    state.cancel_interaction_on(id);
    if let Some(window) = state.window_mut(id) {
        window.set_minimized(true);
    }
    tracing::debug!("minimized window {}", id);
    true
}

fn restore(state: &mut State, id: WindowId) -> bool {
    if state.window(id).is_none() {
        return false;
    }
    if let Some(window) = state.window_mut(id) {
        window.set_minimized(false);
    }
    state.focus_window(id);
    tracing::debug!("restored window {}", id);
    true
}

fn toggle_fullscreen(state: &mut State, id: WindowId) -> bool {
    if state.window(id).is_none() {
        return false;
    }
    state.cancel_interaction_on(id);
    let target = state.viewport.usable();
    if let Some(window) = state.window_mut(id) {
        if window.fullscreen() {
            window.exit_fullscreen();
            tracing::debug!("window {} left fullscreen", id);
        } else {
            window.enter_fullscreen(target);
            tracing::debug!("window {} went fullscreen", id);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::models::{AppKind, Manager, Point, Rect, WindowId};
    use crate::Command;

    #[test]
    fn minimize_then_restore_should_refocus_the_window() {
        let mut manager = Manager::new_test();
        let notes = manager.open(AppKind::Notes);
        let games = manager.open(AppKind::Games);

        assert!(manager.command_handler(&Command::Minimize(notes)));
        assert!(manager.state.window(notes).unwrap().minimized());

        assert!(manager.command_handler(&Command::Restore(notes)));
        let window = manager.state.window(notes).unwrap();
        assert!(!window.minimized());
        assert_eq!(manager.state.focused_window().unwrap().id, notes);
        assert!(window.z > manager.state.window(games).unwrap().z);
    }

    #[test]
    fn minimize_should_preserve_geometry_for_the_restore() {
        let mut manager = Manager::new_test();
        let id = manager.open(AppKind::Notes);
        let before = manager.state.window(id).unwrap().rect;

        manager.command_handler(&Command::Minimize(id));
        manager.command_handler(&Command::Restore(id));
        assert_eq!(manager.state.window(id).unwrap().rect, before);
    }

    #[test]
    fn fullscreen_round_trip_should_restore_exact_geometry() {
        let mut manager = Manager::new_test();
        let id = manager.open(AppKind::Notes);
        let before = manager.state.window(id).unwrap().rect;

        assert!(manager.command_handler(&Command::ToggleFullscreen(id)));
        let window = manager.state.window(id).unwrap();
        assert!(window.fullscreen());
        assert_eq!(window.rect, Rect::new(0, 40, 1920, 1040));
        assert_eq!(window.saved_rect(), Some(before));

        assert!(manager.command_handler(&Command::ToggleFullscreen(id)));
        let window = manager.state.window(id).unwrap();
        assert!(!window.fullscreen());
        assert_eq!(window.rect, before);
        assert_eq!(window.saved_rect(), None);
    }

    #[test]
    fn minimize_should_cancel_an_active_drag() {
        let mut manager = Manager::new_test();
        let id = manager.open(AppKind::Notes);
        assert!(manager.begin_drag(id, Point::new(500, 500)));
        assert!(manager.command_handler(&Command::Minimize(id)));
        assert!(!manager.update_drag(Point::new(600, 600)));
        assert!(manager.state.window(id).unwrap().start_rect.is_none());
    }

    #[test]
    fn commands_on_unknown_windows_should_noop() {
        let mut manager = Manager::new_test();
        for command in [
            Command::Close(WindowId(9)),
            Command::Focus(WindowId(9)),
            Command::Minimize(WindowId(9)),
            Command::Restore(WindowId(9)),
            Command::ToggleFullscreen(WindowId(9)),
        ] {
            assert!(!manager.command_handler(&command));
        }
    }

    #[test]
    fn open_notes_then_games_should_stack_and_focus_in_order() {
        let mut manager = Manager::new_test();
        assert!(manager.command_handler(&Command::Open(AppKind::Notes)));
        assert!(manager.command_handler(&Command::Open(AppKind::Games)));

        let notes = &manager.state.windows[0];
        let games = &manager.state.windows[1];
        assert_eq!(notes.z, 1);
        assert_eq!(games.z, 2);
        assert_eq!(manager.state.focused_window().unwrap().id, games.id);
    }
}
