//! Objects (such as windows) used to run the deskshell window manager.
mod app_kind;
mod geometry;
mod manager;
mod mode;
mod viewport;
mod window;

pub mod view;

pub use app_kind::AppKind;
pub use geometry::Point;
pub use geometry::Rect;
pub use geometry::Size;
pub use manager::Manager;
pub use mode::Mode;
pub use mode::ResizeEdge;
pub use view::ManagerState;
pub use view::WindowView;
pub use viewport::DeviceClass;
pub use viewport::Viewport;
pub use window::Window;
pub use window::WindowId;
