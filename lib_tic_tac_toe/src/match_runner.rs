use crate::{OpponentKind, TicTacToeState};
use lib_boardgame::{GameOutcome, MovePicker, Player};
use std::ops::Add;
use tracing::{debug, trace};

/// Plays one game to the end with both sides driven by pickers,
/// and returns how it ended.
///
/// # Panics
/// If a picker returns no move or an occupied cell while the game is running.
pub fn play_match(x_picker: &dyn MovePicker, o_picker: &dyn MovePicker) -> GameOutcome {
    let mut state = TicTacToeState::initial_state(OpponentKind::Human);

    while state.is_running() {
        trace!("\n{}", state.board());
        let player = state.current_player();

        let picker = match player {
            Player::X => x_picker,
            _ => o_picker,
        };

        let position = picker
            .pick_move(state.board(), player)
            .unwrap_or_else(|| panic!("Picker for {:?} gave up on a running game.", player));

        if !state.try_move(position) {
            panic!("Picker for {:?} provided a move that is illegal: {}", player, position);
        }
    }

    let outcome = state
        .outcome()
        .expect("The game is over, so there must be an outcome.");
    debug!(?outcome, "match finished\n{}", state.board());

    outcome
}

/// Outcome counts over a series of matches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
            Player::None => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl From<GameOutcome> for MatchTally {
    fn from(outcome: GameOutcome) -> Self {
        let mut tally = MatchTally::default();
        tally.record(outcome);
        tally
    }
}

impl Add for MatchTally {
    type Output = MatchTally;

    fn add(self, other: MatchTally) -> MatchTally {
        MatchTally {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}
