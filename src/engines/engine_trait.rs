//! Engine abstraction layer.
//!
//! Every move-selection strategy sits behind `Engine` so hosts and the
//! self-play driver can pick one at runtime. Engines read a `GameState`
//! snapshot and never modify it.

use crate::game_state::chess_types::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// White-relative score of `best_move`, when the engine searched.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks a move for the side to move. `best_move` is `None` when the side
    /// to move has no legal move or the game is already over.
    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput;
}
