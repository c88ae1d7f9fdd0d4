//! Check-aware move legality.
//!
//! Combines raw movement legality with a simulation pass on a copy of the
//! board: a move is legal only if the mover's king is not attacked
//! afterwards. That single test covers check evasion and pins.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_validator::raw_legal;

pub fn is_valid_move(game_state: &GameState, from: Square, to: Square) -> bool {
    if game_state.is_game_over() || !raw_legal(game_state, from, to) {
        return false;
    }
    let Some(piece) = game_state.board().get(from) else {
        return false;
    };

    let mut simulated = *game_state.board();
    simulated.relocate(from, to);
    !is_king_in_check(&simulated, piece.color)
}

/// Legal destinations for the piece on `from`, in row-major order.
pub fn valid_moves(game_state: &GameState, from: Square) -> Vec<Square> {
    if game_state.board().is_empty(from) {
        return Vec::new();
    }
    Square::all()
        .filter(|to| is_valid_move(game_state, from, *to))
        .collect()
}

/// Every legal `(from, to)` pair for the side to move.
pub fn all_valid_moves(game_state: &GameState) -> Vec<(Square, Square)> {
    let side = game_state.current_player();
    game_state
        .board()
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .flat_map(|(from, _)| {
            valid_moves(game_state, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}
