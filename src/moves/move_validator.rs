//! Raw per-piece move legality.
//!
//! "Raw" means check is ignored: a raw-legal move may still leave the
//! mover's own king attacked. The legal move filter layers that on top.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::{castling_precondition, is_king_step};
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::is_pawn_move;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

/// Movement legality of whatever stands on `from`, independent of whose
/// turn it is. Rejects empty origins, off-board squares, null moves and
/// same-colored destinations before dispatching on the piece kind.
pub fn shape_legal(board: &BoardState, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if matches!(board.get(to), Some(target) if target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, from, to, piece.color),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(board, from, to),
        PieceKind::Rook => is_rook_move(board, from, to),
        PieceKind::Queen => is_queen_move(board, from, to),
        PieceKind::King => is_king_step(from, to) || castling_precondition(board, from, to),
    }
}

/// [`shape_legal`] restricted to pieces of the side to move.
pub fn raw_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    let board = game_state.board();
    match board.get(from) {
        Some(piece) if piece.color == game_state.current_player() => shape_legal(board, from, to),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{raw_legal, shape_legal};
    use crate::game_state::chess_types::*;

    #[test]
    fn side_to_move_gates_raw_legality() {
        let game = GameState::new_game();
        assert!(raw_legal(&game, Square::new(6, 4), Square::new(4, 4)));
        assert!(!raw_legal(&game, Square::new(1, 4), Square::new(3, 4)));
        assert!(shape_legal(game.board(), Square::new(1, 4), Square::new(3, 4)));
    }

    #[test]
    fn shared_preconditions() {
        let game = GameState::new_game();
        let board = game.board();
        // Empty origin.
        assert!(!shape_legal(board, Square::new(4, 4), Square::new(3, 4)));
        // Null move.
        assert!(!shape_legal(board, Square::new(7, 1), Square::new(7, 1)));
        // Friendly destination.
        assert!(!shape_legal(board, Square::new(7, 0), Square::new(6, 0)));
        // Off board.
        assert!(!shape_legal(board, Square::new(7, 1), Square::new(9, 2)));
        assert!(!shape_legal(board, Square::new(-1, 0), Square::new(0, 0)));
    }

    #[test]
    fn knights_jump_over_the_opening_wall() {
        let game = GameState::new_game();
        assert!(raw_legal(&game, Square::new(7, 1), Square::new(5, 0)));
        assert!(raw_legal(&game, Square::new(7, 1), Square::new(5, 2)));
        assert!(!raw_legal(&game, Square::new(7, 1), Square::new(5, 3)));
        assert!(!raw_legal(&game, Square::new(7, 2), Square::new(5, 4)));
    }

    #[test]
    fn rook_captures_but_not_own_pieces() {
        let mut board = BoardState::empty();
        board.set(
            Square::new(7, 0),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        board.set(
            Square::new(3, 0),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );
        let mut game = GameState::from_board(board);
        assert!(raw_legal(&game, Square::new(7, 0), Square::new(3, 0)));

        board.set(
            Square::new(5, 0),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        game = GameState::from_board(board);
        assert!(!raw_legal(&game, Square::new(7, 0), Square::new(5, 0)));
        assert!(!raw_legal(&game, Square::new(7, 0), Square::new(3, 0)));
    }
}
