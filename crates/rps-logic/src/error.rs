//! Error types for the game core.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised at the string-typed boundary.
///
/// Inside the crate the closed [`Move`](crate::rules::Move) enum makes an
/// invalid move unrepresentable; only callers passing free-form strings
/// (the WASM surface) can hit this. A rejected call mutates no state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The string is not one of "rock", "paper", "scissors".
    #[error("invalid move {0:?} (expected rock, paper, or scissors)")]
    InvalidMove(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_names_the_input() {
        let err = GameError::InvalidMove("lizard".to_string());
        assert_eq!(
            err.to_string(),
            "invalid move \"lizard\" (expected rock, paper, or scissors)"
        );
    }
}
