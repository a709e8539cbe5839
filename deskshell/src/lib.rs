//! Deskshell front end: concrete configuration and the driver binaries
//! around the `deskshell-core` window manager.
mod config;

pub use config::*;
