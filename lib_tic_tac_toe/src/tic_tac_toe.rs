use crate::{OpponentKind, SaveError, TicTacToeState};
use lib_agents::MediumDifficultyPicker;
use lib_boardgame::{Board, BoardPosition, GameOutcome, GameResult, MovePicker, Player};
use tracing::{debug, info};

/// A tic-tac-toe game as seen by a presentation layer.
///
/// Human moves come in through [`TicTacToeGame::take_turn`]. In a game against
/// the computer, the computer always plays `O` and its moves are produced by
/// the game's [`MovePicker`] through [`TicTacToeGame::take_computer_turn`].
pub struct TicTacToeGame {
    state: TicTacToeState,
    move_picker: Box<dyn MovePicker>,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new(Box::new(MediumDifficultyPicker::new()))
    }
}

impl TicTacToeGame {
    /// A game with no game started yet, using `move_picker` for computer turns.
    pub fn new(move_picker: Box<dyn MovePicker>) -> Self {
        Self {
            state: TicTacToeState::new(),
            move_picker,
        }
    }

    pub fn with_picker(move_picker: impl MovePicker + 'static) -> Self {
        Self::new(Box::new(move_picker))
    }

    /// Clears the board and starts over with X to move.
    pub fn start_new_game(&mut self, opponent: OpponentKind) {
        self.state = TicTacToeState::initial_state(opponent);
        info!(%opponent, "new game started");
    }

    /// Like [`TicTacToeGame::start_new_game`], for callers holding an opponent code
    /// (`0` human, `1` computer). On an unknown code nothing changes.
    pub fn start_new_game_with_code(&mut self, code: i32) -> GameResult<()> {
        let opponent = OpponentKind::from_code(code)?;
        self.start_new_game(opponent);

        Ok(())
    }

    /// Plays the current player's mark at (row, col).
    ///
    /// Returns `Ok(false)` if the move was not accepted: the game is over, it is
    /// the computer's turn, or the cell is taken. Coordinates outside the board
    /// are an error.
    pub fn take_turn(&mut self, row: usize, col: usize) -> GameResult<bool> {
        if !self.state.is_running() || self.state.is_computer_turn() {
            debug!(row, col, "move rejected, not a human turn");
            return Ok(false);
        }

        let position = BoardPosition::new(row, col)?;
        let accepted = self.state.try_move(position);
        if !accepted {
            debug!(%position, "move rejected, cell is taken");
        }

        Ok(accepted)
    }

    /// Asks the picker for O's move and plays it. Returns the position played,
    /// or `None` if the game is not running, it is not the computer's turn,
    /// or the picker has no move.
    ///
    /// # Panics
    /// When called in a game against a human opponent.
    pub fn take_computer_turn(&mut self) -> Option<BoardPosition> {
        assert!(
            self.state.opponent() == OpponentKind::Computer,
            "take_computer_turn called in a game without a computer opponent"
        );

        if !self.state.is_computer_turn() {
            return None;
        }

        let player = self.state.current_player();
        let position = self.move_picker.pick_move(self.state.board(), player)?;

        if !self.state.try_move(position) {
            panic!(
                "Picker provided a move that is illegal: {} on\n{}",
                position,
                self.state.board()
            );
        }

        Some(position)
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn winner(&self) -> Player {
        self.state.winner()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    pub fn opponent(&self) -> OpponentKind {
        self.state.opponent()
    }

    /// The mark at (row, col).
    pub fn value_at(&self, row: usize, col: usize) -> GameResult<Player> {
        self.state.board().value_at(row, col)
    }

    /// A snapshot of the board.
    pub fn board(&self) -> Board {
        self.state.board()
    }

    /// A copy of the current state, suitable for saving.
    pub fn state(&self) -> TicTacToeState {
        self.state
    }

    /// Replaces the current state with a saved one. The picker is kept.
    /// An inconsistent state is refused and the game is left as it was.
    pub fn restore(&mut self, state: TicTacToeState) -> Result<(), SaveError> {
        state.validate()?;
        self.state = state;
        debug!(opponent = %state.opponent(), running = state.is_running(), "game restored");

        Ok(())
    }

    pub fn save_json(&self) -> Result<String, SaveError> {
        self.state.to_json()
    }

    pub fn load_json(&mut self, json: &str) -> Result<(), SaveError> {
        let state = TicTacToeState::from_json(json)?;
        self.restore(state)
    }

    /// One line describing the game for a status bar.
    pub fn status_text(&self) -> String {
        match self.state.outcome() {
            Some(GameOutcome::Win(winner)) => format!("{} wins!", winner),
            Some(GameOutcome::Draw) => "Draw".to_string(),
            None if self.state.is_running() => format!("{}'s turn", self.state.current_player()),
            None => "Start a new game".to_string(),
        }
    }
}
