//! Crate root module declarations for the Plum rules engine.
//!
//! The engine models a two-player chess position: board state, per-piece
//! movement legality, attack and check detection, move execution with undo,
//! and king-capture end detection. Presentation, the remote move-suggestion
//! service and any I/O live outside the crate; `engines` and `utils` hold
//! the payloads and notation those collaborators exchange with it.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_validator;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
    pub mod remote_request;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{
    BoardState, CapturedLedger, Color, GameState, MoveRecord, Piece, PieceKind, Square,
};
pub use game_state::game_status::GameStatus;
