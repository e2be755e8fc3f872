mod medium_difficulty_picker;
mod random_picker;
pub mod util;

pub use medium_difficulty_picker::{winning_move, MediumDifficultyPicker};
pub use random_picker::RandomPicker;
