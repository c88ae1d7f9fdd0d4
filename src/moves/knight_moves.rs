use crate::game_state::chess_types::Square;

/// L-shaped jump; knights ignore whatever stands in between.
#[inline]
pub const fn is_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta(to);
    let (d_row, d_col) = (d_row.abs(), d_col.abs());
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
