pub mod command_handler;
mod focus_handler;
mod viewport_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;
