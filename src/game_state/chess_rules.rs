//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! back-rank layout and the exported form of the opening position.

use crate::game_state::chess_types::PieceKind;

/// Export string of the standard opening position. Castling, en-passant and
/// clock fields are always emitted as placeholders.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank layout from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
