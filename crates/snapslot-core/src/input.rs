//! Pointer events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// The button that starts and ends drags.
    pub fn is_primary(self) -> bool {
        self == Self::Left
    }
}

/// Pointer event for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Up {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        position: Point,
    },
}

impl PointerEvent {
    /// Primary-button press at `position`.
    pub fn down(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
        }
    }

    /// Primary-button release at `position`.
    pub fn up(position: Point) -> Self {
        Self::Up {
            position,
            button: MouseButton::Left,
        }
    }

    pub fn moved(position: Point) -> Self {
        Self::Move { position }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => {
                position
            }
        }
    }

    /// Same event at another position.
    pub fn with_position(self, position: Point) -> Self {
        match self {
            Self::Down { button, .. } => Self::Down { position, button },
            Self::Up { button, .. } => Self::Up { position, button },
            Self::Move { .. } => Self::Move { position },
        }
    }
}
