use crate::errors::{Result, ShellError};
use crate::models::{AppKind, WindowId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A discrete intent from the dock or the window chrome. Drag and resize
/// are continuous begin/update/end interactions and go through the manager
/// methods directly rather than through commands.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Open(AppKind),
    Close(WindowId),
    CloseFocused,
    CloseAll,
    Focus(WindowId),
    Minimize(WindowId),
    Restore(WindowId),
    ToggleFullscreen(WindowId),
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        let (head, rest) = s.split_once(' ').unwrap_or((s, ""));
        match head {
            "Open" => build_open(rest),
            "Close" => Ok(Self::Close(parse_window_id(rest)?)),
            "CloseFocused" => Ok(Self::CloseFocused),
            "CloseAll" => Ok(Self::CloseAll),
            "Focus" => Ok(Self::Focus(parse_window_id(rest)?)),
            "Minimize" => Ok(Self::Minimize(parse_window_id(rest)?)),
            "Restore" => Ok(Self::Restore(parse_window_id(rest)?)),
            "ToggleFullscreen" => Ok(Self::ToggleFullscreen(parse_window_id(rest)?)),
            _ => Err(ShellError::UnknownCommand(s.to_string())),
        }
    }
}

fn build_open(raw: &str) -> Result<Command> {
    if raw.is_empty() {
        return Err(ShellError::MissingArgument("app id"));
    }
    // App id parsing never fails; unknown ids open as `Other`.
    Ok(Command::Open(AppKind::parse(raw)))
}

fn parse_window_id(raw: &str) -> Result<WindowId> {
    if raw.is_empty() {
        return Err(ShellError::MissingArgument("window id"));
    }
    Ok(WindowId(raw.parse()?))
}
