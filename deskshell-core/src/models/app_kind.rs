//! The set of application views the shell can host.
use super::{DeviceClass, Size};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which application view a window renders. The dock addresses apps by a
/// short string id; anything it sends that we don't recognize becomes
/// `Other` and still opens with generic geometry. The content renderer is
/// responsible for showing its own "app not found" state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum AppKind {
    Notes,
    Messages,
    Friends,
    Games,
    Utilities,
    Nexus,
    Studio,
    Settings,
    Admin,
    Browser,
    Other(String),
}

impl AppKind {
    /// The short id the dock and the config file use for this app.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Notes => "notes",
            Self::Messages => "messages",
            Self::Friends => "friends",
            Self::Games => "games",
            Self::Utilities => "utils",
            Self::Nexus => "nexus",
            Self::Studio => "studio",
            Self::Settings => "settings",
            Self::Admin => "admin",
            Self::Browser => "browser",
            Self::Other(id) => id,
        }
    }

    /// The title shown in the window chrome.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Notes => "Notes",
            Self::Messages => "Messages",
            Self::Friends => "Friends",
            Self::Games => "Games Arcade",
            Self::Utilities => "Utilities",
            Self::Nexus => "Nexus AI",
            Self::Studio => "Dev Studio",
            Self::Settings => "Settings",
            Self::Admin => "System Monitor",
            Self::Browser => "Browser",
            Self::Other(_) => "App",
        }
    }

    /// The built-in default window size for this app on the given device
    /// class. Values below the configured minimum are raised when a window
    /// is opened, so the table does not need to know about minimums.
    #[must_use]
    pub const fn default_size(&self, device: DeviceClass) -> Size {
        if matches!(device, DeviceClass::Mobile) {
            // Small screens get one compact size regardless of app.
            return Size::new(360, 560);
        }
        match self {
            Self::Notes | Self::Messages => Size::new(800, 600),
            Self::Friends => Size::new(640, 520),
            Self::Games => Size::new(900, 700),
            Self::Utilities => Size::new(480, 420),
            Self::Nexus => Size::new(640, 560),
            Self::Studio => Size::new(1000, 700),
            Self::Settings => Size::new(700, 560),
            Self::Admin => Size::new(860, 620),
            Self::Browser => Size::new(1024, 720),
            Self::Other(_) => Size::new(800, 600),
        }
    }
}

impl AppKind {
    /// Parse a dock id. Never fails; unrecognized ids become `Other`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "notes" => Self::Notes,
            "messages" => Self::Messages,
            "friends" => Self::Friends,
            "games" => Self::Games,
            "utils" => Self::Utilities,
            "nexus" => Self::Nexus,
            "studio" => Self::Studio,
            "settings" => Self::Settings,
            "admin" => Self::Admin,
            "browser" => Self::Browser,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for AppKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
