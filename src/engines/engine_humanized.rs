//! Easy-level engine with deliberate imprecision.
//!
//! Some of the time it plays a uniformly random legal move. Otherwise it
//! scores every root move exactly and picks uniformly among those within
//! `tolerance_cp` of the best.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::engines::engine_random::random_move;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::{score_root_moves, SearchConfig};
use crate::search::board_scoring::PieceSquareScorer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanizedConfig {
    pub depth: u8,
    /// Chance of skipping the search and playing a random legal move.
    pub random_move_probability: f64,
    /// Moves scoring strictly closer than this to the best are candidates.
    pub tolerance_cp: i32,
}

impl Default for HumanizedConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            random_move_probability: 0.3,
            tolerance_cp: 50,
        }
    }
}

pub fn humanized_choice<R: Rng + ?Sized>(
    game_state: &GameState,
    config: &HumanizedConfig,
    rng: &mut R,
) -> EngineOutput {
    if game_state.status.is_terminal() {
        return EngineOutput::default();
    }

    if rng.random_bool(config.random_move_probability.clamp(0.0, 1.0)) {
        trace!("humanized engine playing a random move");
        return EngineOutput {
            best_move: random_move(game_state, rng),
            score: None,
            nodes: 0,
        };
    }

    let (scored, nodes) = score_root_moves(
        game_state,
        &PieceSquareScorer,
        SearchConfig {
            depth: config.depth,
        },
    );

    let maximizing = game_state.turn() == Color::White;
    let mut best: Option<&(Move, i32)> = None;
    for entry in &scored {
        let improves = match best {
            None => true,
            Some((_, s)) if maximizing => entry.1 > *s,
            Some((_, s)) => entry.1 < *s,
        };
        if improves {
            best = Some(entry);
        }
    }
    let Some((best_move, best_score)) = best.cloned() else {
        return EngineOutput {
            nodes,
            ..EngineOutput::default()
        };
    };

    let candidates: Vec<&(Move, i32)> = scored
        .iter()
        .filter(|(_, score)| (score - best_score).abs() < config.tolerance_cp)
        .collect();
    trace!(candidates = candidates.len(), best_score, "humanized candidates");

    let (chosen, score) = if candidates.len() > 1 {
        candidates
            .choose(rng)
            .map(|(mv, score)| (mv.clone(), *score))
            .unwrap_or((best_move, best_score))
    } else {
        (best_move, best_score)
    };

    EngineOutput {
        best_move: Some(chosen),
        score: Some(score),
        nodes,
    }
}

pub struct HumanizedEngine {
    config: HumanizedConfig,
    rng: StdRng,
}

impl HumanizedEngine {
    pub fn new(config: HumanizedConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(config: HumanizedConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for HumanizedEngine {
    fn name(&self) -> &str {
        "Plum Rules Humanized"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        humanized_choice(game_state, &self.config, &mut self.rng)
    }
}
