//! Mailbox board representation.
//!
//! `BoardState` exclusively owns an 8x8 grid of optional pieces. All reads
//! are bounds-checked: off-board squares behave as permanently empty.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardState {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening placement: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            board.set(Square::new(0, col), Some(Piece::new(*kind, Color::Black)));
            board.set(
                Square::new(1, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Square::new(6, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set(Square::new(7, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize]
    }

    /// Writes a cell. Off-board writes are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.cells[square.row as usize][square.col as usize] = piece;
        }
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// True iff `square` holds a piece of the color opposite to `color`.
    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color != color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Relocates whatever stands on `from` to `to` without any rule handling.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(to, piece);
        self.set(from, None);
    }
}

#[cfg(test)]
mod tests {
    use super::BoardState;
    use crate::game_state::chess_types::*;

    #[test]
    fn off_board_reads_are_empty() {
        let board = BoardState::starting_position();
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (i8::MAX, i8::MIN)] {
            let sq = Square::new(row, col);
            assert_eq!(board.get(sq), None);
            assert!(board.is_empty(sq));
            assert!(!board.is_enemy(sq, Color::White));
        }
    }

    #[test]
    fn queries_do_not_mutate() {
        let board = BoardState::starting_position();
        let snapshot = board;
        for sq in Square::all() {
            let first = board.get(sq);
            assert_eq!(board.get(sq), first);
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn starting_position_layout() {
        let board = BoardState::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(Square::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.find_king(Color::Black), Some(Square::new(0, 4)));
        assert!(board.is_enemy(Square::new(1, 0), Color::White));
        assert!(!board.is_enemy(Square::new(6, 0), Color::White));
        assert!(board.is_empty(Square::new(4, 4)));
    }

    #[test]
    fn off_board_writes_are_ignored() {
        let mut board = BoardState::empty();
        board.set(
            Square::new(8, 8),
            Some(Piece::new(PieceKind::Rook, Color::White)),
        );
        assert_eq!(board, BoardState::empty());
        assert_eq!(board.find_king(Color::White), None);
    }
}
