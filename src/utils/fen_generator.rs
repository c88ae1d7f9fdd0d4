//! One-way position export for the move-suggestion service.
//!
//! Only placement and side to move are tracked; castling, en passant and the
//! clocks are emitted as fixed placeholders, so the string cannot rebuild
//! history, captures or castling rights.

use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.current_player() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!("{board} {side_to_move} - - 0 1")
}

/// Rows 0..=7 (ranks 8 down to 1), runs of empty squares as digits.
pub fn generate_board_field(board: &BoardState) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}
