//! Core value types shared by every rules component.
//!
//! Squares, colors, piece kinds and pieces are small `Copy` values. Boards
//! and histories own them outright; nothing in the engine aliases a piece.

use serde::{Deserialize, Serialize};

pub use crate::game_state::board_state::BoardState;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::{CapturedLedger, MoveRecord};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row where this color's pawns start and may double step.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row from this color's side, where its pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind. Closed set; every match over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case export letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` is the unmoved flag read by the castling precondition. It is
/// never flipped in place: committing a move writes [`Piece::as_moved`] on
/// the destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn as_moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    /// Kind and color equality, ignoring the moved flag.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.kind == other.kind && self.color == other.color
    }

    /// Export letter: upper-case for White, lower-case for Black.
    pub fn fen_char(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
    }

    pub const fn unicode(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

/// Board coordinate. Row 0 is rank 8 (Black's back rank), row 7 is rank 1.
///
/// Fields are signed so that off-board probes can be expressed; they are
/// simply never occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Saturates at the `i8` limits, so a far off-board probe stays off board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Signed `(row, col)` distance from `self` to `to`, widened so that any
    /// pair of squares fits.
    #[inline]
    pub const fn delta(self, to: Square) -> (i16, i16) {
        (
            to.row as i16 - self.row as i16,
            to.col as i16 - self.col as i16,
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_follow_color_case() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).fen_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).fen_char(), 'n');
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
    }

    #[test]
    fn moved_flag_does_not_change_identity() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let moved = rook.as_moved();
        assert!(moved.has_moved);
        assert!(!rook.has_moved);
        assert!(rook.same_identity(&moved));
        assert_ne!(rook, moved);
    }

    #[test]
    fn square_bounds_and_enumeration() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 3).is_on_board());
        assert!(!Square::new(3, 8).is_on_board());
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().nth(9), Some(Square::new(1, 1)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let low = Square::new(i8::MIN, i8::MIN);
        let high = Square::new(i8::MAX, i8::MAX);
        assert_eq!(low.delta(high), (255, 255));
        assert_eq!(high.delta(low), (-255, -255));
        assert_eq!(high.offset(1, 1), high);
        assert_eq!(low.offset(-1, 0), low);
        assert!(!low.offset(-1, 0).is_on_board());
    }
}
