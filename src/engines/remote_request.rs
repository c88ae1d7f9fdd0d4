//! Payloads exchanged with the remote move-suggestion service.
//!
//! The engine never performs the request itself. It builds the JSON body
//! from the position export and the configured parameters, and translates
//! the coordinate move in the reply back to internal squares.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::SuggestionParams;
use crate::game_state::chess_types::{GameState, Square};
use crate::utils::long_algebraic::parse_coordinate_move;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub fen: String,
    pub depth: u8,
    pub variants: u8,
    pub max_thinking_time: u32,
}

impl SuggestionRequest {
    pub fn new(game_state: &GameState, params: &SuggestionParams) -> Self {
        Self {
            fen: game_state.to_fen(),
            depth: params.depth,
            variants: params.variants,
            max_thinking_time: params.max_thinking_time_ms,
        }
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Reply body. Only the coordinate move is consumed; other fields the
/// service sends are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestionResponse {
    #[serde(rename = "move")]
    pub mv: Option<String>,
}

impl SuggestionResponse {
    pub fn from_json(body: &str) -> ChessResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn coordinates(&self) -> ChessResult<(Square, Square)> {
        let mv = self.mv.as_deref().ok_or(ChessError::NoSuggestedMove)?;
        parse_coordinate_move(mv)
    }
}
