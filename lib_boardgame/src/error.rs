use crate::BOARD_SIZE;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("unrecognized opponent code {code}")]
    InvalidOpponent { code: i32 },
    #[error("row {row} out of bounds for board length {len}", len = BOARD_SIZE)]
    RowOutOfRange { row: usize },
    #[error("column {col} out of bounds for board length {len}", len = BOARD_SIZE)]
    ColumnOutOfRange { col: usize },
}

impl GameError {
    pub fn invalid_opponent(code: i32) -> Self {
        Self::InvalidOpponent { code }
    }

    pub fn row_out_of_range(row: usize) -> Self {
        Self::RowOutOfRange { row }
    }

    pub fn column_out_of_range(col: usize) -> Self {
        Self::ColumnOutOfRange { col }
    }
}
