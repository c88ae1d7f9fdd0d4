//! Pawn pushes, captures and the en-passant precondition.

use crate::game_state::chess_types::*;

/// Single push, double push from the home row, or diagonal capture onto an
/// enemy piece. A diagonal step onto an empty square is never accepted here.
pub fn is_pawn_move(board: &BoardState, from: Square, to: Square, color: Color) -> bool {
    let forward = color.forward() as i16;
    let (d_row, d_col) = from.delta(to);

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(to);
        }
        if d_row == 2 * forward && from.row == color.pawn_home_row() {
            return board.is_empty(from.offset(color.forward(), 0)) && board.is_empty(to);
        }
        return false;
    }

    d_col.abs() == 1 && d_row == forward && board.is_enemy(to, color)
}

/// Diagonal-forward geometry of a pawn of `color` standing on `from`,
/// regardless of what occupies `target`.
#[inline]
pub const fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta(target);
    d_row == color.forward() as i16 && d_col.abs() == 1
}

/// True when `from -> to` would be an en-passant capture: a pawn stepping
/// diagonally onto an empty square just behind an enemy pawn whose double
/// step was the last move played.
///
/// Precondition only. The move validator does not consult it and nothing
/// removes the passed pawn.
pub fn en_passant_precondition(
    board: &BoardState,
    last_move: Option<&MoveRecord>,
    from: Square,
    to: Square,
) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(pawn) = board.get(from) else {
        return false;
    };
    if pawn.kind != PieceKind::Pawn || !pawn_attacks(pawn.color, from, to) || !board.is_empty(to) {
        return false;
    }

    let Some(last) = last_move else {
        return false;
    };
    let passed = Square::new(from.row, to.col);
    last.piece.kind == PieceKind::Pawn
        && last.piece.color != pawn.color
        && last.from.delta(last.to).0.abs() == 2
        && last.to == passed
        && last.from.col == passed.col
        && matches!(board.get(passed), Some(p) if p.kind == PieceKind::Pawn && p.color != pawn.color)
}
