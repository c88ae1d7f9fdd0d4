//! Move-suggestion abstraction consumed by the presentation layer.
//!
//! Defines the search parameters forwarded to a suggestion backend and the
//! trait every backend implements, so a local picker and a remote service
//! can be swapped behind one interface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{GameState, Square};

/// Preset strength levels. Unknown names parse as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionParams {
    pub depth: u8,
    pub variants: u8,
    pub max_thinking_time_ms: u32,
}

impl Default for SuggestionParams {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Medium)
    }
}

impl SuggestionParams {
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        let (depth, max_thinking_time_ms) = match difficulty {
            Difficulty::Easy => (8, 30),
            Difficulty::Medium => (12, 50),
            Difficulty::Hard => (18, 80),
        };
        Self {
            depth,
            variants: 1,
            max_thinking_time_ms,
        }
    }
}

pub trait MoveSuggester {
    fn name(&self) -> &str;

    /// A move for the side to move, or `None` when there is nothing to play.
    fn suggest_move(
        &mut self,
        game_state: &GameState,
        params: &SuggestionParams,
    ) -> ChessResult<Option<(Square, Square)>>;
}
