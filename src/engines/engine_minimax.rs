//! Fixed-depth alpha-beta engine.

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::GameState;
use crate::search::alpha_beta::{alpha_beta_search, SearchConfig};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self::with_scorer(SearchConfig { depth }, PieceSquareScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl<S: BoardScorer + Send> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Plum Rules Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        if game_state.status.is_terminal() {
            return EngineOutput::default();
        }

        let result = alpha_beta_search(game_state, &self.scorer, self.config);
        EngineOutput {
            score: result.best_move.as_ref().map(|_| result.best_score),
            best_move: result.best_move,
            nodes: result.nodes,
        }
    }
}
