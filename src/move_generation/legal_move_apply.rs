//! Move execution and single-step undo.
//!
//! `commit` is the only path that advances a game and `undo` the only path
//! that rewinds one. Both report failure with `false` and leave the state
//! untouched when they refuse.

use log::{debug, info, trace};

use crate::game_state::chess_types::*;
use crate::game_state::game_status::evaluate;
use crate::move_generation::legal_move_generator::is_valid_move;

/// Plays `from -> to` for the side to move.
///
/// The move is re-validated here regardless of what the caller checked.
/// A pawn reaching its promotion row always becomes a Queen.
pub fn commit(game_state: &mut GameState, from: Square, to: Square) -> bool {
    if game_state.game_over {
        debug!("commit {from:?}->{to:?} refused: game is over");
        return false;
    }
    if !is_valid_move(game_state, from, to) {
        debug!("commit {from:?}->{to:?} refused: illegal for {:?}", game_state.current_player);
        return false;
    }
    let Some(piece) = game_state.board.get(from) else {
        return false;
    };

    let captured = game_state.board.get(to);
    if let Some(victim) = captured {
        game_state.captured.push(piece.color, victim);
    }
    game_state.history.push(MoveRecord {
        from,
        to,
        piece,
        captured,
    });

    let placed = if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
        Piece::new(PieceKind::Queen, piece.color).as_moved()
    } else {
        piece.as_moved()
    };
    game_state.board.set(from, None);
    game_state.board.set(to, Some(placed));
    trace!("committed {:?} {from:?}->{to:?} captured={captured:?}", piece.kind);

    let status = evaluate(&game_state.board);
    game_state.game_over = status.is_over();
    game_state.winner = status.winner();
    if game_state.game_over {
        info!("king captured, {:?} wins", game_state.winner);
    } else {
        game_state.current_player = game_state.current_player.opposite();
    }

    true
}

/// Reverts the most recent commit, including any game-ending capture.
pub fn undo(game_state: &mut GameState) -> bool {
    let Some(record) = game_state.history.pop() else {
        debug!("undo refused: history is empty");
        return false;
    };

    game_state.board.set(record.from, Some(record.piece));
    game_state.board.set(record.to, record.captured);
    if let Some(victim) = record.captured {
        game_state.captured.remove_first(record.piece.color, &victim);
    }

    // The mover is to move again; a game-ending commit never flipped sides.
    game_state.current_player = record.piece.color;
    game_state.game_over = false;
    game_state.winner = None;
    trace!("undid {:?} {:?}->{:?}", record.piece.kind, record.from, record.to);

    true
}
