//! Coordinate move notation (`e2e4`) as used by the move-suggestion service.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse an origin/destination pair such as `e2e4`.
///
/// A trailing promotion letter (`e7e8q`) is accepted and dropped: pawns
/// always promote to a Queen on commit.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraicString(text.to_owned()));
    }

    if let Some(promotion) = text.chars().nth(4) {
        if !matches!(promotion.to_ascii_lowercase(), 'q' | 'r' | 'b' | 'n') {
            return Err(ChessError::InvalidAlgebraicChar(promotion));
        }
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok((from, to))
}

pub fn format_coordinate_move(from: Square, to: Square) -> ChessResult<String> {
    let mut out = square_to_algebraic(from)?;
    out.push_str(&square_to_algebraic(to)?);
    Ok(out)
}
