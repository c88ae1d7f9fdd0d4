//! King stepping and the castling precondition.
//!
//! Castling here is precondition-only: a two-square king move toward an
//! unmoved rook over empty squares is accepted, but the rook is never
//! relocated and the squares the king crosses are not tested for attack.

use crate::game_state::chess_types::*;
use crate::moves::sliding::path_is_clear;

/// One square in any direction.
#[inline]
pub const fn is_king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    d_row <= 1 && d_col <= 1 && !(d_row == 0 && d_col == 0)
}

/// Two-square king move along its row toward an unmoved same-colored rook
/// on the corner column, with every square between king and rook empty.
pub fn castling_precondition(board: &BoardState, from: Square, to: Square) -> bool {
    let Some(king) = board.get(from) else {
        return false;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return false;
    }
    if from.row != to.row || from.delta(to).1.abs() != 2 {
        return false;
    }

    let rook_col = if to.col > from.col { 7 } else { 0 };
    let rook_sq = Square::new(from.row, rook_col);
    let rook_ready = matches!(
        board.get(rook_sq),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    );

    rook_ready && path_is_clear(board, from, rook_sq)
}
