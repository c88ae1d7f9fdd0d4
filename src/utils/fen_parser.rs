//! Position-string import.
//!
//! Reads the placement and side-to-move fields of a position string and
//! builds a fresh `GameState` from them. Remaining fields are ignored since
//! the engine tracks neither castling rights, en passant nor clocks. Pieces
//! come out unmoved, which makes the castling precondition available to any
//! king and rook on their own corners.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFenForm("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFenForm("missing side to move".to_owned()))?;

    let board = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;

    Ok(GameState::from_board(board).with_side_to_move(side))
}

fn parse_board(board_part: &str) -> ChessResult<BoardState> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFenForm(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = BoardState::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFenToken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessError::InvalidFenToken(ch))?;
            if col >= 8 {
                return Err(ChessError::InvalidFenForm(format!(
                    "rank {rank_str} has too many files"
                )));
            }

            board.set(Square::new(row as i8, col as i8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFenForm(format!(
                "rank {rank_str} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidSideToMove(side_part.to_owned())),
    }
}
