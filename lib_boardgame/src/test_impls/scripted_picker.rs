use crate::{Board, BoardPosition, MovePicker, Player};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A MovePicker that replays a fixed list of moves, in order,
/// and remembers every board it was shown.
#[derive(Default)]
pub struct ScriptedPicker {
    moves: RefCell<VecDeque<BoardPosition>>,
    seen: RefCell<Vec<(Board, Player)>>,
}

impl ScriptedPicker {
    pub fn new(moves: impl IntoIterator<Item = BoardPosition>) -> Self {
        Self {
            moves: RefCell::new(moves.into_iter().collect()),
            seen: Default::default(),
        }
    }

    /// The (board, player) pairs passed to `pick_move` so far.
    pub fn seen(&self) -> Vec<(Board, Player)> {
        self.seen.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.moves.borrow().len()
    }
}

impl MovePicker for ScriptedPicker {
    fn pick_move(&self, board: Board, player: Player) -> Option<BoardPosition> {
        self.seen.borrow_mut().push((board, player));
        self.moves.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_moves_then_runs_out() {
        let first = BoardPosition::new(0, 0).unwrap();
        let second = BoardPosition::new(2, 1).unwrap();
        let picker = ScriptedPicker::new(vec![first, second]);

        assert_eq!(Some(first), picker.pick_move(Board::new(), Player::X));
        assert_eq!(Some(second), picker.pick_move(Board::new(), Player::O));
        assert_eq!(None, picker.pick_move(Board::new(), Player::X));

        assert_eq!(0, picker.remaining());
        let players: Vec<_> = picker.seen().into_iter().map(|(_, p)| p).collect();
        assert_eq!(vec![Player::X, Player::O, Player::X], players);
    }
}
