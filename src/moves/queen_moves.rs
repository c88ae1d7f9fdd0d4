use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::rook_moves::is_rook_move;

#[inline]
pub fn is_queen_move(board: &BoardState, from: Square, to: Square) -> bool {
    is_rook_move(board, from, to) || is_bishop_move(board, from, to)
}
