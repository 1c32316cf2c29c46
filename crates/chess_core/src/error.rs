use thiserror::Error;

/// Errors raised when positions or moves come from outside the engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("cannot parse move `{0}`")]
    InvalidMove(String),

    #[error("move `{0}` is not legal in this position")]
    IllegalMove(String),
}
