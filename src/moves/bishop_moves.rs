use crate::game_state::chess_types::*;
use crate::moves::sliding::path_is_clear;

/// Equal, nonzero row and column distance with an empty diagonal between.
#[inline]
pub fn is_bishop_move(board: &BoardState, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    if d_row == 0 || d_row != d_col {
        return false;
    }
    path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_bishop_move;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_walks_diagonals_only() {
        let mut board = BoardState::empty();
        let from = Square::new(7, 2);
        assert!(is_bishop_move(&board, from, Square::new(5, 0)));
        assert!(is_bishop_move(&board, from, Square::new(5, 4)));
        assert!(is_bishop_move(&board, from, Square::new(2, 7)));
        assert!(!is_bishop_move(&board, from, Square::new(6, 2)));
        assert!(!is_bishop_move(&board, from, from));

        board.set(
            Square::new(5, 4),
            Some(Piece::new(PieceKind::Knight, Color::White)),
        );
        assert!(!is_bishop_move(&board, from, Square::new(4, 5)));
    }
}
