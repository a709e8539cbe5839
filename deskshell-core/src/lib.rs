//! Window management core for the deskshell web-OS shell.
//!
//! This crate owns the collection of open application instances, their
//! geometry, z-order/focus, minimized/fullscreen flags, and the drag/resize
//! interaction state machine. Rendering, the dock, and per-app content are
//! external collaborators: they send intents in and receive a render set
//! back, but never mutate window geometry themselves.
#![warn(clippy::pedantic)]
// These lints are globally allowed because they otherwise make a lot of
// noise around plain i32 pixel arithmetic.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
pub mod errors;
mod handlers;
pub mod models;
pub mod state;

pub use command::Command;
pub use config::Config;
pub use models::{
    AppKind, DeviceClass, Manager, ManagerState, Mode, Point, Rect, ResizeEdge, Size, Viewport,
    Window, WindowId, WindowView,
};
pub use state::State;
