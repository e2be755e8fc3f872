mod board;
mod error;
mod player;
pub mod test_impls;

pub use board::{Board, BoardPosition, Line};
pub use error::GameError;
pub use player::Player;

use serde::{Deserialize, Serialize};

/// The size of the board.  E.x. if 3, the board is a 3x3 grid.
pub const BOARD_SIZE: usize = 3;

pub type GameResult<T> = Result<T, GameError>;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn winner(self) -> Player {
        match self {
            GameOutcome::Win(winner) => winner,
            GameOutcome::Draw => Player::None,
        }
    }
}

/// The capability of choosing a move.
/// Given a snapshot of the board and the player to move for,
/// a MovePicker decides a position, or `None` when the board is full.
pub trait MovePicker {
    fn pick_move(&self, board: Board, player: Player) -> Option<BoardPosition>;
}

impl<T: MovePicker + ?Sized> MovePicker for Box<T> {
    fn pick_move(&self, board: Board, player: Player) -> Option<BoardPosition> {
        (**self).pick_move(board, player)
    }
}
