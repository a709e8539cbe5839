//! The read-only view of manager state handed to renderers each pass.
use super::{AppKind, Rect, Window, WindowId};
use crate::state::State;
use serde::{Deserialize, Serialize};

/// What a per-app content view needs to draw one window: where it goes and
/// which app to render there. Content views never mutate geometry; chrome
/// (title bar, resize handles) belongs to the manager.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub id: WindowId,
    pub app: AppKind,
    pub title: String,
    pub rect: Rect,
    pub z: u32,
    pub focused: bool,
    pub fullscreen: bool,
}

/// One full render pass: the visible windows in ascending stacking order.
/// Minimized windows are excluded but stay in the manager's collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    pub focused: Option<WindowId>,
    pub windows: Vec<WindowView>,
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let focused = state.focused_window().map(|w| w.id);
        let mut windows: Vec<&Window> = state.windows.iter().filter(|w| w.visible()).collect();
        windows.sort_by_key(|w| w.z);
        let windows = windows
            .iter()
            .map(|w| WindowView {
                id: w.id,
                app: w.app.clone(),
                title: w.app.title().to_string(),
                rect: w.rect,
                z: w.z,
                focused: focused == Some(w.id),
                fullscreen: w.fullscreen(),
            })
            .collect();
        Self { focused, windows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Manager;

    #[test]
    fn render_set_should_exclude_minimized_windows() {
        let mut manager = Manager::new_test();
        let notes = manager.open(AppKind::Notes);
        let games = manager.open(AppKind::Games);
        manager.command_handler(&crate::Command::Minimize(notes));

        let view = ManagerState::from(&manager.state);
        assert_eq!(view.windows.len(), 1);
        assert_eq!(view.windows[0].id, games);
        // The minimized window is retained, just not rendered.
        assert_eq!(manager.state.windows.len(), 2);
    }

    #[test]
    fn render_set_should_serialize_for_the_driver() {
        let mut manager = Manager::new_test();
        manager.open(AppKind::Notes);
        let json = serde_json::to_string(&manager.state.render_set()).unwrap();
        assert!(json.contains("\"title\":\"Notes\""));
    }

    #[test]
    fn render_set_should_be_in_ascending_stacking_order() {
        let mut manager = Manager::new_test();
        let notes = manager.open(AppKind::Notes);
        let games = manager.open(AppKind::Games);
        manager.state.focus_window(notes);

        let view = ManagerState::from(&manager.state);
        let order: Vec<WindowId> = view.windows.iter().map(|w| w.id).collect();
        assert_eq!(order, vec![games, notes]);
        assert_eq!(view.focused, Some(notes));
        assert!(view.windows[1].focused);
    }
}
