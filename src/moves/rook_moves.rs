use crate::game_state::chess_types::*;
use crate::moves::sliding::path_is_clear;

/// Same row or same column with nothing standing strictly between.
#[inline]
pub fn is_rook_move(board: &BoardState, from: Square, to: Square) -> bool {
    if from == to || (from.row != to.row && from.col != to.col) {
        return false;
    }
    path_is_clear(board, from, to)
}
