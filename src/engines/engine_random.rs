//! Uniform random-move engine.
//!
//! Used on its own for diagnostics and self-play smoke tests, and as the
//! "blunder" branch of the humanized engine.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::GameState;
use crate::moves::move_descriptions::Move;

/// Uniformly random legal move for the side to move, if any.
pub fn random_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<Move> {
    if game_state.status.is_terminal() {
        return None;
    }
    let legal_moves = game_state.legal_moves(game_state.turn());
    legal_moves.as_slice().choose(rng).cloned()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

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

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Rules Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        EngineOutput {
            best_move: random_move(game_state, &mut self.rng),
            score: None,
            nodes: 0,
        }
    }
}
