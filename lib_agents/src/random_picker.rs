use crate::util::{get_rng, random_choice, seeded_rng};
use lib_boardgame::{Board, BoardPosition, MovePicker, Player};
use rand::Rng;
use rand_xorshift::XorShiftRng;
use std::cell::RefCell;

/// Picks uniformly among the empty cells, ignoring the position entirely.
pub struct RandomPicker<R = XorShiftRng> {
    rng: RefCell<R>,
}

impl RandomPicker<XorShiftRng> {
    pub fn new() -> Self {
        Self::with_rng(get_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(seeded_rng(seed))
    }
}

impl Default for RandomPicker<XorShiftRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomPicker {
            rng: RefCell::new(rng),
        }
    }
}

/// A uniformly random empty cell, or `None` on a full board.
pub(crate) fn pick_random_empty<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<BoardPosition> {
    random_choice(&board.empty_cells(), rng)
}

impl<R: Rng> MovePicker for RandomPicker<R> {
    fn pick_move(&self, board: Board, _player: Player) -> Option<BoardPosition> {
        pick_random_empty(&board, &mut *self.rng.borrow_mut())
    }
}
