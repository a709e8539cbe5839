use super::WindowId;
use serde::{Deserialize, Serialize};

/// The active pointer interaction. Only one drag or resize can be in
/// progress at a time, so the whole state machine is a single slot held by
/// `State`. `begin_*` moves out of `Normal`, pointer release moves back.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    Dragging(WindowId),
    Resizing(WindowId, ResizeEdge),
    #[default]
    Normal,
}

impl Mode {
    /// The window the current interaction targets, if any.
    #[must_use]
    pub const fn window(&self) -> Option<WindowId> {
        match self {
            Self::Dragging(id) | Self::Resizing(id, _) => Some(*id),
            Self::Normal => None,
        }
    }
}

/// Which window edge or corner a resize was started from. The opposite
/// edge stays fixed for the whole interaction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    #[must_use]
    pub const fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    #[must_use]
    pub const fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    #[must_use]
    pub const fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    #[must_use]
    pub const fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}
