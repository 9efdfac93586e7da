//! Difficulty levels and the AI move entry points.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::chess_errors::ParseDifficultyError;
use crate::engines::engine_humanized::{humanized_choice, HumanizedConfig, HumanizedEngine};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig};
use crate::search::board_scoring::PieceSquareScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Engine that plays at this level. `seed` makes the easy level reproducible.
    pub fn engine(self, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            Difficulty::Easy => {
                let config = HumanizedConfig {
                    depth: self.depth(),
                    ..HumanizedConfig::default()
                };
                match seed {
                    Some(seed) => Box::new(HumanizedEngine::with_seed(config, seed)),
                    None => Box::new(HumanizedEngine::new(config)),
                }
            }
            Difficulty::Medium | Difficulty::Hard => Box::new(MinimaxEngine::new(self.depth())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

/// Computer move for the side to move, or `None` when there is none to play.
pub fn get_ai_move(game_state: &GameState, difficulty: Difficulty) -> Option<Move> {
    get_ai_move_with_rng(game_state, difficulty, &mut rand::rng())
}

/// As [`get_ai_move`], drawing the easy level's randomness from `rng`.
pub fn get_ai_move_with_rng<R: Rng + ?Sized>(
    game_state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    if game_state.status.is_terminal() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => {
            let config = HumanizedConfig {
                depth: difficulty.depth(),
                ..HumanizedConfig::default()
            };
            humanized_choice(game_state, &config, rng).best_move
        }
        Difficulty::Medium | Difficulty::Hard => {
            let config = SearchConfig {
                depth: difficulty.depth(),
            };
            alpha_beta_search(game_state, &PieceSquareScorer, config).best_move
        }
    }
}
