//! Live game representation.
//!
//! `GameState` is the single owner of the board, the side to move, the move
//! history and the capture ledgers. It is mutated only by `commit` and
//! `undo`; every other method is a read-only query. The methods here are the
//! surface a presentation layer drives.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator;
use crate::moves::pawn_moves::en_passant_precondition;
use crate::utils::fen_generator::generate_fen;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: BoardState,
    pub(crate) current_player: Color,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) captured: CapturedLedger,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening position, White to move.
    pub fn new_game() -> Self {
        Self::from_board(BoardState::starting_position())
    }

    /// Arbitrary position with White to move and no history.
    pub fn from_board(board: BoardState) -> Self {
        Self {
            board,
            current_player: Color::White,
            history: Vec::new(),
            captured: CapturedLedger::default(),
            game_over: false,
            winner: None,
        }
    }

    pub fn with_side_to_move(mut self, color: Color) -> Self {
        self.current_player = color;
        self
    }

    /// Discards the current game and rebuilds the opening position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn piece(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        self.captured.captured_by(color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        legal_move_generator::is_valid_move(self, from, to)
    }

    pub fn valid_moves(&self, from: Square) -> Vec<Square> {
        legal_move_generator::valid_moves(self, from)
    }

    pub fn all_valid_moves(&self) -> Vec<(Square, Square)> {
        legal_move_generator::all_valid_moves(self)
    }

    /// See [`en_passant_precondition`]; checked against the last move played.
    pub fn en_passant_available(&self, from: Square, to: Square) -> bool {
        en_passant_precondition(&self.board, self.history.last(), from, to)
    }

    pub fn commit(&mut self, from: Square, to: Square) -> bool {
        legal_move_apply::commit(self, from, to)
    }

    pub fn undo(&mut self) -> bool {
        legal_move_apply::undo(self)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
