//! Line walking shared by the sliding pieces.

use crate::game_state::chess_types::*;

/// Unit step from `from` toward `to` when both lie on a common rank, file or
/// diagonal; `None` otherwise (including `from == to`).
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let (d_row, d_col) = from.delta(to);
    if d_row == 0 && d_col == 0 {
        return None;
    }
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    aligned.then(|| (d_row.signum() as i8, d_col.signum() as i8))
}

/// Squares strictly between `from` and `to` along a shared line.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let Some((row_step, col_step)) = line_step(from, to) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(6);
    let mut sq = from.offset(row_step, col_step);
    while sq != to {
        out.push(sq);
        sq = sq.offset(row_step, col_step);
    }
    out
}

/// True iff every square strictly between `from` and `to` is empty.
#[inline]
pub fn path_is_clear(board: &BoardState, from: Square, to: Square) -> bool {
    squares_between(from, to)
        .into_iter()
        .all(|sq| board.is_empty(sq))
}
