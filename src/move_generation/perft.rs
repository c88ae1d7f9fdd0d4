//! Leaf counting over the legal move tree.
//!
//! Walks the tree with `commit`/`undo` on a private copy of the game, so it
//! doubles as a consistency check of the executor.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{commit, undo};
use crate::move_generation::legal_move_generator::all_valid_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.king_captures += rhs.king_captures;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    perft_recurse(&mut scratch, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in all_valid_moves(game_state) {
        let mover = game_state.current_player();
        if !commit(game_state, from, to) {
            continue;
        }

        if depth == 1 {
            total.merge(leaf_counts(game_state, mover));
        } else {
            total.merge(perft_recurse(game_state, depth - 1));
        }

        let undone = undo(game_state);
        debug_assert!(undone, "undo refused after a committed move");
    }

    total
}

fn leaf_counts(game_state: &GameState, mover: Color) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    let Some(last) = game_state.history().last() else {
        return counts;
    };

    if let Some(captured) = last.captured {
        counts.captures = 1;
        if captured.kind == PieceKind::King {
            counts.king_captures = 1;
        }
    }
    if last.piece.kind == PieceKind::Pawn && last.to.row == mover.promotion_row() {
        counts.promotions = 1;
    }
    if game_state.is_in_check(mover.opposite()) {
        counts.checks = 1;
    }

    counts
}
