use crate::{GameError, GameResult, Player, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoardPosition {
    row: usize,
    col: usize,
}

impl BoardPosition {
    /// A position on the board, or an out-of-range error naming the
    /// offending coordinate (the row is checked first).
    pub fn new(row: usize, col: usize) -> GameResult<Self> {
        if row >= BOARD_SIZE {
            return Err(GameError::row_out_of_range(row));
        }
        if col >= BOARD_SIZE {
            return Err(GameError::column_out_of_range(col));
        }

        Ok(Self::at(row, col))
    }

    const fn at(row: usize, col: usize) -> Self {
        BoardPosition { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Cells with an even coordinate sum are the corners and the centre,
    /// i.e. the only cells a diagonal passes through.
    pub fn on_diagonal(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Three cells checked together for a win.
pub type Line = [BoardPosition; BOARD_SIZE];

const fn column(col: usize) -> Line {
    [
        BoardPosition::at(0, col),
        BoardPosition::at(1, col),
        BoardPosition::at(2, col),
    ]
}

const fn row(row: usize) -> Line {
    [
        BoardPosition::at(row, 0),
        BoardPosition::at(row, 1),
        BoardPosition::at(row, 2),
    ]
}

/// Every line on the board in scan order:
/// columns 0..2, rows 0..2, the main diagonal, then the anti-diagonal.
const LINES: [Line; 8] = [
    column(0),
    column(1),
    column(2),
    row(0),
    row(1),
    row(2),
    [
        BoardPosition::at(0, 0),
        BoardPosition::at(1, 1),
        BoardPosition::at(2, 2),
    ],
    [
        BoardPosition::at(0, 2),
        BoardPosition::at(1, 1),
        BoardPosition::at(2, 0),
    ],
];

const CENTER: BoardPosition = BoardPosition::at(1, 1);

/// A 3x3 grid of marks, row-major.
/// `Board` is `Copy`: passing one around hands out an independent snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Player; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Player; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Player; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// All eight lines, in the fixed scan order.
    pub fn lines() -> &'static [Line] {
        &LINES
    }

    pub fn get(&self, position: BoardPosition) -> Player {
        self.cells[position.row][position.col]
    }

    /// Checked lookup for callers holding raw coordinates.
    pub fn value_at(&self, row: usize, col: usize) -> GameResult<Player> {
        BoardPosition::new(row, col).map(|position| self.get(position))
    }

    /// Set the cell at the position to the given mark.
    pub fn place(&mut self, position: BoardPosition, player: Player) {
        self.cells[position.row][position.col] = player;
    }

    pub fn is_empty_at(&self, position: BoardPosition) -> bool {
        self.get(position).is_none()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<BoardPosition> {
        let mut empty = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let position = BoardPosition::at(row, col);
                if self.is_empty_at(position) {
                    empty.push(position);
                }
            }
        }

        empty
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|p| p.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|p| p.is_some())
    }

    /// True if the mark at `position` completes a row, column or diagonal.
    ///
    /// Only the lines through `position` are inspected, which is enough when
    /// called after every move: no other line can have just been completed.
    pub fn move_wins(&self, position: BoardPosition) -> bool {
        let line_is_won = |line: Line| {
            let first = self.get(line[0]);
            first.is_some() && line.iter().all(|&p| self.get(p) == first)
        };

        if line_is_won(row(position.row)) || line_is_won(column(position.col)) {
            return true;
        }

        if !position.on_diagonal() || self.get(CENTER).is_none() {
            return false;
        }

        line_is_won(LINES[6]) || line_is_won(LINES[7])
    }

    /// The owner of a completed line anywhere on the board, or `Player::None`.
    /// Scans the whole board rather than the last move's lines.
    pub fn winner(&self) -> Player {
        LINES
            .iter()
            .map(|line| {
                let first = self.get(line[0]);
                if line.iter().all(|&p| self.get(p) == first) {
                    first
                } else {
                    Player::None
                }
            })
            .find(|p| p.is_some())
            .unwrap_or(Player::None)
    }

    /// Since the human-friendly output is always the same size,
    /// might as well pre-compute it so we can reserve the space ahead of time.
    const fn friendly_print_size() -> usize {
        18
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(Self::friendly_print_size());

        for row in self.cells.iter() {
            for (col, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Player::None => '_',
                    Player::X => 'X',
                    Player::O => 'O',
                };
                result.push(symbol);

                if col != BOARD_SIZE - 1 {
                    result.push('|');
                }
            }

            result.push('\n');
        }

        f.write_str(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player::{None as E, O, X};

    fn pos(row: usize, col: usize) -> BoardPosition {
        BoardPosition::new(row, col).unwrap()
    }

    #[test]
    fn human_friendly_reserves_correct_size() {
        let board = Board::new();

        assert_eq!(Board::friendly_print_size(), board.to_string().len());
    }

    #[test]
    fn display_renders_rows_top_down() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);

        assert_eq!("X|_|_\n_|O|_\n_|_|X\n", board.to_string());
    }

    #[test]
    fn position_rejects_out_of_range_coordinates() {
        assert_eq!(Err(GameError::row_out_of_range(3)), BoardPosition::new(3, 0));
        assert_eq!(
            Err(GameError::column_out_of_range(7)),
            BoardPosition::new(1, 7)
        );
        // the row is reported first when both are bad
        assert_eq!(Err(GameError::row_out_of_range(5)), BoardPosition::new(5, 5));
    }

    #[test]
    fn value_at_checks_bounds() {
        let mut board = Board::new();
        board.place(pos(2, 1), O);

        assert_eq!(Ok(O), board.value_at(2, 1));
        assert_eq!(Ok(E), board.value_at(0, 0));
        assert!(board.value_at(0, 3).is_err());
    }

    #[test]
    fn copies_do_not_alias() {
        let mut board = Board::new();
        let snapshot = board;

        board.place(pos(0, 0), X);

        assert_eq!(X, board.get(pos(0, 0)));
        assert_eq!(E, snapshot.get(pos(0, 0)));
    }

    #[test]
    fn lines_follow_scan_order() {
        let lines = Board::lines();

        assert_eq!(8, lines.len());
        assert_eq!([pos(0, 0), pos(1, 0), pos(2, 0)], lines[0]);
        assert_eq!([pos(0, 2), pos(1, 2), pos(2, 2)], lines[2]);
        assert_eq!([pos(0, 0), pos(0, 1), pos(0, 2)], lines[3]);
        assert_eq!([pos(2, 0), pos(2, 1), pos(2, 2)], lines[5]);
        assert_eq!([pos(0, 0), pos(1, 1), pos(2, 2)], lines[6]);
        assert_eq!([pos(0, 2), pos(1, 1), pos(2, 0)], lines[7]);
    }

    #[test]
    fn empty_cells_are_row_major() {
        let board = Board::from_rows([[X, E, O], [E, X, O], [O, X, E]]);

        assert_eq!(vec![pos(0, 1), pos(1, 0), pos(2, 2)], board.empty_cells());
        assert_eq!(3, board.empty_count());
        assert!(!board.is_full());
    }

    #[test]
    fn move_wins_detects_row_and_column() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(board.move_wins(pos(0, 1)));
        assert!(!board.move_wins(pos(1, 1)));

        let board = Board::from_rows([[O, X, E], [O, X, E], [O, E, E]]);
        assert!(board.move_wins(pos(2, 0)));
        assert!(!board.move_wins(pos(1, 1)));
    }

    #[test]
    fn move_wins_detects_diagonals() {
        let board = Board::from_rows([[X, O, O], [O, X, E], [E, E, X]]);
        assert!(board.move_wins(pos(2, 2)));

        let board = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);
        assert!(board.move_wins(pos(2, 0)));
        assert!(board.move_wins(pos(1, 1)));
    }

    #[test]
    fn move_wins_ignores_diagonals_off_the_move() {
        // (1, 0) is not on a diagonal, even though the main diagonal is complete
        let board = Board::from_rows([[X, O, O], [X, X, E], [O, E, X]]);
        assert!(!board.move_wins(pos(1, 0)));
        assert!(board.move_wins(pos(0, 0)));
    }

    #[test]
    fn move_wins_ignores_empty_lines() {
        let board = Board::new();
        for position in board.empty_cells() {
            assert!(!board.move_wins(position));
        }
    }

    #[test]
    fn winner_scans_whole_board() {
        assert_eq!(E, Board::new().winner());

        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(E, board.winner());
        assert!(board.is_full());

        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        assert_eq!(O, board.winner());
    }
}
