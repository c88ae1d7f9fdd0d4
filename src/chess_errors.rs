//! Errors used at the boundary of the rules engine.
//!
//! Rule queries and commands never fail with an error: they answer with
//! `bool`, `Option` or an empty `Vec`. `ChessError` covers the parsing and
//! translation work done for collaborators (square notation, coordinate
//! moves, position strings and move-suggestion payloads).
//!
//! Usage guidelines:
//! - Parsing functions return `Result<..., ChessError>` so callers can
//!   propagate with `?` or show the message to a user.
//! - Every variant carries the offending input so a log line is enough to
//!   diagnose a bad payload.

use thiserror::Error;

/// Unified error type for notation and payload handling.
#[derive(Debug, Error)]
pub enum ChessError {
    /// A file or rank character fell outside `a..=h` / `1..=8`.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A square or coordinate move had the wrong shape.
    ///
    /// Payload: the original string.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// Unexpected character inside the placement field of a position string.
    #[error("invalid position token '{0}'")]
    InvalidFenToken(char),

    /// Position string had malformed structure (wrong rank count, rank not
    /// summing to eight files, missing fields).
    #[error("malformed position string: {0}")]
    InvalidFenForm(String),

    /// Side-to-move field was neither `w` nor `b`.
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),

    /// The move-suggestion reply did not contain a move.
    #[error("no suggested move in response")]
    NoSuggestedMove,

    /// JSON encoding or decoding of a suggestion payload failed.
    #[error("suggestion payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
