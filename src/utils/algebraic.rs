//! Square conversions for algebraic coordinates.
//!
//! Files `a..=h` map to columns 0..=7 left to right; ranks `1..=8` map to
//! rows 7..=0, so `row = 8 - rank`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_on_board() {
        return Err(ChessError::InvalidAlgebraicString(format!(
            "({}, {})",
            square.row, square.col
        )));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'0' + (8 - square.row) as u8);

    Ok(format!("{file_char}{rank_char}"))
}
