//! Random-move suggester.
//!
//! Selects uniformly from legal moves. Used as an offline stand-in for the
//! remote suggestion service and to drive randomized playouts in tests.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{MoveSuggester, SuggestionParams};
use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::legal_move_generator::all_valid_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSuggester for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn suggest_move(
        &mut self,
        game_state: &GameState,
        _params: &SuggestionParams,
    ) -> ChessResult<Option<(Square, Square)>> {
        if game_state.is_game_over() {
            return Ok(None);
        }

        let legal_moves = all_valid_moves(game_state);
        debug!("random engine choosing among {} moves", legal_moves.len());
        Ok(legal_moves.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{MoveSuggester, SuggestionParams};
    use crate::game_state::chess_types::*;

    #[test]
    fn suggestions_are_legal() {
        let mut engine = RandomEngine::with_seed(7);
        let params = SuggestionParams::default();
        let mut game = GameState::new_game();

        for _ in 0..40 {
            let Some((from, to)) = engine
                .suggest_move(&game, &params)
                .expect("random engine should not fail")
            else {
                break;
            };
            assert!(game.is_valid_move(from, to));
            assert!(game.commit(from, to));
        }
    }

    #[test]
    fn random_playouts_unwind_to_the_start() {
        let params = SuggestionParams::default();

        for seed in 0..8u64 {
            let mut engine = RandomEngine::with_seed(seed);
            let mut game = GameState::new_game();
            let mut played = 0usize;

            while played < 120 {
                let suggestion = engine
                    .suggest_move(&game, &params)
                    .expect("random engine should not fail");
                let Some((from, to)) = suggestion else {
                    break;
                };
                assert!(game.commit(from, to));
                played += 1;
            }

            assert_eq!(game.history().len(), played);
            let captured = game.captured_by(Color::White).len() + game.captured_by(Color::Black).len();
            assert_eq!(game.board().pieces().count() + captured, 32);

            while game.undo() {}
            assert_eq!(game, GameState::new_game(), "seed {seed} did not unwind");
        }
    }

    #[test]
    fn finished_game_gets_no_suggestion() {
        let mut board = BoardState::empty();
        board.set(
            Square::new(7, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Square::new(6, 4),
            Some(Piece::new(PieceKind::King, Color::Black)),
        );
        let mut game = GameState::from_board(board);
        assert!(game.commit(Square::new(7, 4), Square::new(6, 4)));
        assert!(game.is_game_over());

        let mut engine = RandomEngine::with_seed(1);
        let suggestion = engine
            .suggest_move(&game, &SuggestionParams::default())
            .expect("random engine should not fail");
        assert_eq!(suggestion, None);
    }
}
