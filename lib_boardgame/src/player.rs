use serde::{Deserialize, Serialize};
use std::fmt;

/// The mark occupying a cell, or the player whose turn it is.
/// `None` stands for an empty cell, "no winner", or "nobody's turn".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    None,
    X,
    O,
}

impl Player {
    /// The other mark. `None` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
            Player::None => Player::None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Player::None
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// The text a presentation layer shows for this value.
    pub fn label(self) -> &'static str {
        match self {
            Player::None => "",
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn none_renders_as_empty_string() {
        assert_eq!("", Player::None.to_string());
        assert_eq!("X", Player::X.to_string());
        assert_eq!("O", Player::O.to_string());
    }

    #[test]
    fn opponent_swaps_marks() {
        assert_eq!(Player::O, Player::X.opponent());
        assert_eq!(Player::X, Player::O.opponent());
        assert_eq!(Player::None, Player::None.opponent());
    }
}
