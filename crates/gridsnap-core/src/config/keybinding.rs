use serde::{Deserialize, Serialize};

use crate::action::{Direction, MoveMode, SnapRequest};

/// A user-configured hotkey that maps a key combination to a snap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keybinding {
    /// The snap direction.
    pub direction: Direction,
    /// Move or extend.
    pub mode: MoveMode,
    /// Key name (e.g. "Left", "J", "F1").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "alt"]).
    pub modifiers: Vec<Modifier>,
}

impl Keybinding {
    pub fn request(&self) -> SnapRequest {
        SnapRequest {
            direction: self.direction,
            mode: self.mode,
        }
    }
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

/// Returns the default hotkeys.
///
/// Move: Ctrl + Alt + ArrowKey
/// Extend: Ctrl + Alt + Shift + ArrowKey
pub fn defaults() -> Vec<Keybinding> {
    use Modifier::{Alt, Ctrl, Shift};

    let arrows = [
        (Direction::Left, "Left"),
        (Direction::Right, "Right"),
        (Direction::Up, "Up"),
        (Direction::Down, "Down"),
    ];

    let mut bindings = Vec::with_capacity(8);
    for (direction, key) in arrows {
        bindings.push(bind(direction, MoveMode::Move, key, &[Ctrl, Alt]));
    }
    for (direction, key) in arrows {
        bindings.push(bind(direction, MoveMode::Extend, key, &[Ctrl, Alt, Shift]));
    }
    bindings
}

fn bind(direction: Direction, mode: MoveMode, key: &str, modifiers: &[Modifier]) -> Keybinding {
    Keybinding {
        direction,
        mode,
        key: key.into(),
        modifiers: modifiers.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_direction_mode_pairs() {
        let bindings = defaults();
        assert_eq!(bindings.len(), 8);

        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            for mode in [MoveMode::Move, MoveMode::Extend] {
                assert!(
                    bindings
                        .iter()
                        .any(|b| b.direction == direction && b.mode == mode),
                    "missing binding for {direction:?} {mode:?}"
                );
            }
        }
    }

    #[test]
    fn extend_bindings_carry_shift() {
        for binding in defaults() {
            let has_shift = binding.modifiers.contains(&Modifier::Shift);
            assert_eq!(has_shift, binding.mode == MoveMode::Extend);
        }
    }

    #[test]
    fn keybinding_parses_from_toml() {
        let binding: Keybinding = toml::from_str(
            r#"
            direction = "up"
            mode = "extend"
            key = "K"
            modifiers = ["ctrl", "alt", "shift"]
            "#,
        )
        .unwrap();

        assert_eq!(binding.direction, Direction::Up);
        assert_eq!(binding.mode, MoveMode::Extend);
        assert_eq!(binding.key, "K");
    }
}
