use crate::random_picker::pick_random_empty;
use crate::util::{get_rng, seeded_rng};
use lib_boardgame::{Board, BoardPosition, Line, MovePicker, Player};
use rand::Rng;
use rand_xorshift::XorShiftRng;
use std::cell::RefCell;
use tracing::trace;

/// Plays the computer on medium difficulty:
/// first look to complete a line of 3, otherwise block the opponent from
/// completing one, otherwise pick an empty cell at random.
pub struct MediumDifficultyPicker<R = XorShiftRng> {
    rng: RefCell<R>,
}

impl MediumDifficultyPicker<XorShiftRng> {
    pub fn new() -> Self {
        Self::with_rng(get_rng())
    }

    /// A picker whose random fallback is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(seeded_rng(seed))
    }
}

impl Default for MediumDifficultyPicker<XorShiftRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MediumDifficultyPicker<R> {
    pub fn with_rng(rng: R) -> Self {
        MediumDifficultyPicker {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: Rng> MovePicker for MediumDifficultyPicker<R> {
    fn pick_move(&self, board: Board, player: Player) -> Option<BoardPosition> {
        if let Some(position) = winning_move(&board, player) {
            trace!(?player, %position, "completing a line");
            return Some(position);
        }

        let opponent = player.opponent();
        if let Some(position) = winning_move(&board, opponent) {
            trace!(?player, %position, "blocking the opponent");
            return Some(position);
        }

        let position = pick_random_empty(&board, &mut *self.rng.borrow_mut());
        trace!(?player, ?position, "no line to complete or block, picking at random");
        position
    }
}

/// The first cell, in line scan order, that would complete a line for `target`.
pub fn winning_move(board: &Board, target: Player) -> Option<BoardPosition> {
    Board::lines()
        .iter()
        .find_map(|line| line_completion(board, line, target))
}

/// The empty cell of `line` if it is the only one and the other two
/// cells both belong to `target`.
fn line_completion(board: &Board, line: &Line, target: Player) -> Option<BoardPosition> {
    let mut empty = None;

    for &position in line {
        let cell = board.get(position);

        if cell.is_none() {
            if empty.is_some() {
                // a second empty cell, no win possible on this line yet
                return None;
            }
            empty = Some(position);
        } else if cell != target {
            return None;
        }
    }

    empty
}
