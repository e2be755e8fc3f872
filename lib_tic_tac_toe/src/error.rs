#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("malformed saved game: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("saved game is inconsistent: {reason}")]
    Inconsistent { reason: &'static str },
}

impl SaveError {
    pub fn inconsistent(reason: &'static str) -> Self {
        Self::Inconsistent { reason }
    }
}
