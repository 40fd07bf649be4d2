use serde::{Deserialize, Serialize};

/// A snap direction, as pressed on the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// How the focused window reacts to a directional hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveMode {
    /// Relocate the window to the destination section.
    Move,
    /// Grow the window to cover both its current section and the
    /// destination section.
    Extend,
}

/// A decoded hotkey press: one of the 8 direction/mode combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapRequest {
    pub direction: Direction,
    pub mode: MoveMode,
}
