use crate::{OpponentKind, SaveError};
use lib_boardgame::{Board, BoardPosition, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything about a game in progress except the computer's strategy:
/// the board, whose turn it is, and whether and how the game ended.
///
/// `running` implies there is no winner, and a stopped game has no current player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: Board,
    current_player: Player,
    winner: Player,
    running: bool,
    opponent: OpponentKind,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeState {
    /// A state before any game was started: empty board, nobody to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::None,
            winner: Player::None,
            running: false,
            opponent: OpponentKind::Human,
        }
    }

    /// Returns a fresh, ready-to-play state. X moves first.
    pub fn initial_state(opponent: OpponentKind) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: Player::None,
            running: true,
            opponent,
        }
    }

    /// A copy of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The player to move, or `Player::None` if the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, or `Player::None` while running or after a draw.
    pub fn winner(&self) -> Player {
        self.winner
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_game_over(&self) -> bool {
        !self.running
    }

    pub fn opponent(&self) -> OpponentKind {
        self.opponent
    }

    /// True when the next move belongs to the computer.
    pub fn is_computer_turn(&self) -> bool {
        self.running && self.opponent == OpponentKind::Computer && self.current_player == Player::O
    }

    /// How the game ended, or `None` if it is still running or never started.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.running {
            None
        } else if self.winner.is_some() {
            Some(GameOutcome::Win(self.winner))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Marks `position` for the current player and advances the game.
    /// Returns false, leaving the state untouched, if the game is not
    /// running or the cell is taken.
    pub fn try_move(&mut self, position: BoardPosition) -> bool {
        if !self.running || !self.board.is_empty_at(position) {
            return false;
        }

        let mover = self.current_player;
        self.board.place(position, mover);
        debug!(player = ?mover, %position, "move applied");

        if self.board.move_wins(position) {
            self.winner = mover;
            self.current_player = Player::None;
            self.running = false;
            debug!(winner = ?mover, "game won");
        } else if self.board.is_full() {
            self.winner = Player::None;
            self.current_player = Player::None;
            self.running = false;
            debug!("game drawn");
        } else {
            self.current_player = mover.opponent();
        }

        true
    }

    /// Checks that the fields describe a position reachable by legal play.
    pub fn validate(&self) -> Result<(), SaveError> {
        let cells = self.board.rows().iter().flatten();
        let x_count = cells.clone().filter(|&&p| p == Player::X).count();
        let o_count = cells.filter(|&&p| p == Player::O).count();

        if x_count != o_count && x_count != o_count + 1 {
            return Err(SaveError::inconsistent("mark counts are not alternating"));
        }

        let line_owner = self.board.winner();

        if self.running {
            if self.winner.is_some() {
                return Err(SaveError::inconsistent("running game has a winner"));
            }
            if line_owner.is_some() || self.board.is_full() {
                return Err(SaveError::inconsistent("running game is already decided"));
            }
            let expected = if x_count == o_count {
                Player::X
            } else {
                Player::O
            };
            if self.current_player != expected {
                return Err(SaveError::inconsistent("wrong player to move"));
            }
            return Ok(());
        }

        if self.current_player.is_some() {
            return Err(SaveError::inconsistent("finished game has a player to move"));
        }
        if self.winner != line_owner {
            return Err(SaveError::inconsistent("winner does not match the board"));
        }
        if owns_a_line(&self.board, Player::X) && owns_a_line(&self.board, Player::O) {
            return Err(SaveError::inconsistent("both players own a line"));
        }
        let winner_moved_last = match self.winner {
            Player::X => x_count == o_count + 1,
            Player::O => x_count == o_count,
            Player::None => true,
        };
        if !winner_moved_last {
            return Err(SaveError::inconsistent("winner did not make the last move"));
        }
        if self.winner.is_none() && !self.board.is_full() && self.board.empty_count() != 9 {
            return Err(SaveError::inconsistent("stopped game is neither won nor drawn"));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and validates a saved state.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let state: Self = serde_json::from_str(json)?;
        state.validate()?;

        Ok(state)
    }
}

fn owns_a_line(board: &Board, player: Player) -> bool {
    Board::lines()
        .iter()
        .any(|line| line.iter().all(|&p| board.get(p) == player))
}
