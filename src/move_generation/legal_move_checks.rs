use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

/// A king with no king on the board is never in check.
#[inline]
pub fn is_king_in_check(board: &BoardState, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

/// True iff some piece of the color opposite `defending_color` attacks
/// `square`.
pub fn is_square_attacked(board: &BoardState, square: Square, defending_color: Color) -> bool {
    board
        .pieces()
        .any(|(from, piece)| piece.color != defending_color && piece_attacks(board, piece, from, square))
}

pub fn attackers_to_square(
    board: &BoardState,
    square: Square,
    defending_color: Color,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces()
        .filter(|(from, piece)| {
            piece.color != defending_color && piece_attacks(board, *piece, *from, square)
        })
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

/// Attack geometry differs from movement for two kinds: pawns attack both
/// forward diagonals whether or not they are occupied, and kings attack
/// adjacent squares only.
fn piece_attacks(board: &BoardState, piece: Piece, from: Square, target: Square) -> bool {
    if from == target || !target.is_on_board() {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        PieceKind::Knight => is_knight_move(from, target),
        PieceKind::Bishop => is_bishop_move(board, from, target),
        PieceKind::Rook => is_rook_move(board, from, target),
        PieceKind::Queen => is_queen_move(board, from, target),
        PieceKind::King => is_king_step(from, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut BoardState, row: i8, col: i8, kind: PieceKind, color: Color) {
        board.set(Square::new(row, col), Some(Piece::new(kind, color)));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut board = BoardState::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 0, 4, PieceKind::Rook, Color::Black);

        assert!(is_king_in_check(&board, Color::White));
        assert_eq!(
            attackers_to_square(&board, Square::new(7, 4), Color::White),
            vec![(Square::new(0, 4), PieceKind::Rook)]
        );

        place(&mut board, 3, 4, PieceKind::Knight, Color::White);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawns_attack_empty_diagonals() {
        let mut board = BoardState::empty();
        place(&mut board, 1, 3, PieceKind::Pawn, Color::Black);

        assert!(is_square_attacked(&board, Square::new(2, 2), Color::White));
        assert!(is_square_attacked(&board, Square::new(2, 4), Color::White));
        assert!(!is_square_attacked(&board, Square::new(2, 3), Color::White));
        assert!(!is_square_attacked(&board, Square::new(3, 3), Color::White));
        // Own pieces never count as attackers.
        assert!(!is_square_attacked(&board, Square::new(2, 2), Color::Black));
    }

    #[test]
    fn castling_geometry_is_not_an_attack() {
        let mut board = BoardState::empty();
        place(&mut board, 0, 4, PieceKind::King, Color::Black);
        place(&mut board, 0, 7, PieceKind::Rook, Color::Black);

        assert!(is_square_attacked(&board, Square::new(0, 5), Color::White));
        assert!(!is_square_attacked(&board, Square::new(0, 2), Color::White));
        assert!(is_square_attacked(&board, Square::new(1, 3), Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = BoardState::empty();
        place(&mut board, 0, 4, PieceKind::Queen, Color::Black);
        assert!(!is_king_in_check(&board, Color::White));
        assert_eq!(board.find_king(Color::White), None);
    }

    #[test]
    fn blocked_slider_does_not_attack() {
        let mut board = BoardState::empty();
        place(&mut board, 7, 4, PieceKind::King, Color::White);
        place(&mut board, 4, 1, PieceKind::Bishop, Color::Black);
        assert!(is_king_in_check(&board, Color::White));

        place(&mut board, 6, 3, PieceKind::Pawn, Color::White);
        assert!(!is_king_in_check(&board, Color::White));
    }
}
