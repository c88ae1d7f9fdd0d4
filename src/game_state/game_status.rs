//! Terminal-state evaluation.
//!
//! The only end condition is a captured king. There is no checkmate,
//! stalemate or draw detection: a side that is mated simply loses its king
//! on the following move.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Won(color) => Some(color),
            GameStatus::Ongoing => None,
        }
    }
}

/// Exactly one missing king ends the game in favor of the other color.
/// A board with both kings, or with neither, is still in play.
pub fn evaluate(board: &BoardState) -> GameStatus {
    let white_king = board.find_king(Color::White).is_some();
    let black_king = board.find_king(Color::Black).is_some();
    match (white_king, black_king) {
        (true, false) => GameStatus::Won(Color::White),
        (false, true) => GameStatus::Won(Color::Black),
        (true, true) | (false, false) => GameStatus::Ongoing,
    }
}
