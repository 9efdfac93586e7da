//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximises and black minimises the white-relative score. Every node
//! works on a `Copy` scratch position; the repetition key stack is pushed and
//! popped around each child so draws by repetition inside the tree score 0.

use tracing::debug;

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::repetition_count;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves_for};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;

/// Score of a mated position, signed by which side is mated.
pub const MATE_SCORE: i32 = 99_999;
const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// White-relative score of `best_move`.
    pub best_score: i32,
    pub nodes: u64,
}

struct Searcher<'a, S: BoardScorer> {
    scorer: &'a S,
    keys: Vec<PositionKey>,
    nodes: u64,
}

/// Best move for the side to move in `state` at `config.depth` plies.
///
/// Returns no move when the side to move has no legal move. Ties keep the
/// first move in captures-first order.
pub fn alpha_beta_search<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut searcher = Searcher::new(state, scorer);
    let position = &state.position;
    let depth = config.depth.max(1);

    let mut moves = legal_moves_for(position, position.turn);
    if moves.is_empty() {
        searcher.nodes += 1;
        return SearchResult {
            best_move: None,
            best_score: searcher.leaf_score(position, false),
            nodes: searcher.nodes,
        };
    }
    order_moves(&mut moves);

    let maximizing = position.turn == Color::White;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;

    for mv in moves {
        let score = searcher.child_score(position, &mv, depth - 1, alpha, beta);
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
    }

    debug!(
        depth,
        nodes = searcher.nodes,
        score = best_score,
        best = ?best_move.as_ref().map(|m| m.to_string()),
        "alpha-beta search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: searcher.nodes,
    }
}

/// Exact score of every root move, each searched with a full window, in
/// captures-first order. Used where near-best alternatives matter.
pub fn score_root_moves<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> (Vec<(Move, i32)>, u64) {
    let mut searcher = Searcher::new(state, scorer);
    let position = &state.position;
    let depth = config.depth.max(1);

    let mut moves = legal_moves_for(position, position.turn);
    order_moves(&mut moves);

    let scored = moves
        .into_iter()
        .map(|mv| {
            let score = searcher.child_score(position, &mv, depth - 1, -INFINITY, INFINITY);
            (mv, score)
        })
        .collect();

    (scored, searcher.nodes)
}

impl<'a, S: BoardScorer> Searcher<'a, S> {
    fn new(state: &GameState, scorer: &'a S) -> Self {
        Self {
            scorer,
            keys: state.position_history.clone(),
            nodes: 0,
        }
    }

    fn child_score(&mut self, position: &Position, mv: &Move, depth: u8, alpha: i32, beta: i32) -> i32 {
        let next = apply_move(position, mv);
        self.keys.push(next.key());
        let score = self.minimax(&next, depth, alpha, beta);
        self.keys.pop();
        score
    }

    fn minimax(&mut self, position: &Position, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            let has_moves = has_legal_move(position, position.turn);
            return self.leaf_score(position, has_moves);
        }

        let mut moves = legal_moves_for(position, position.turn);
        if let Some(score) = self.terminal_score(position, !moves.is_empty()) {
            return score;
        }
        order_moves(&mut moves);

        if position.turn == Color::White {
            let mut best = -INFINITY;
            for mv in &moves {
                let score = self.child_score(position, mv, depth - 1, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in &moves {
                let score = self.child_score(position, mv, depth - 1, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    fn leaf_score(&self, position: &Position, has_moves: bool) -> i32 {
        self.terminal_score(position, has_moves)
            .unwrap_or_else(|| self.scorer.score(&position.board))
    }

    /// Mate, stalemate, fifty-move and repetition scores, in classifier order.
    fn terminal_score(&self, position: &Position, has_moves: bool) -> Option<i32> {
        if !has_moves {
            if !is_in_check(&position.board, position.turn) {
                return Some(0);
            }
            return Some(match position.turn {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            });
        }
        if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES
            || repetition_count(&position.key(), &self.keys) >= REPETITION_LIMIT
        {
            return Some(0);
        }
        None
    }
}
