//! Drag state definitions.

use serde::{Deserialize, Serialize};

/// Where a draggable stands in its drop lifecycle.
///
/// Being held by the pointer is not a separate state: the only gate on
/// movement is whether the element has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Free to move, not on a target.
    #[default]
    Idle,
    /// Snapped onto a target by the last drop.
    Settled,
}

impl DragState {
    pub fn is_settled(self) -> bool {
        self == Self::Settled
    }

    /// Whether a drag may move an element in this state.
    pub fn can_move(self, can_move_again: bool) -> bool {
        !self.is_settled() || can_move_again
    }
}
