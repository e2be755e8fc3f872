mod error;
pub mod match_runner;
pub mod tic_tac_toe;
pub mod tic_tac_toe_gamestate;

pub use error::SaveError;
pub use tic_tac_toe::TicTacToeGame;
pub use tic_tac_toe_gamestate::TicTacToeState;

use lib_boardgame::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who plays `O`. X is always a human and always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpponentKind {
    #[default]
    Human,
    Computer,
}

impl OpponentKind {
    pub const HUMAN_OPPONENT: i32 = 0;
    pub const COMPUTER_OPPONENT: i32 = 1;

    pub fn from_code(code: i32) -> GameResult<Self> {
        match code {
            Self::HUMAN_OPPONENT => Ok(OpponentKind::Human),
            Self::COMPUTER_OPPONENT => Ok(OpponentKind::Computer),
            _ => Err(GameError::invalid_opponent(code)),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            OpponentKind::Human => Self::HUMAN_OPPONENT,
            OpponentKind::Computer => Self::COMPUTER_OPPONENT,
        }
    }
}

impl TryFrom<i32> for OpponentKind {
    type Error = GameError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Human => f.write_str("human"),
            OpponentKind::Computer => f.write_str("computer"),
        }
    }
}
