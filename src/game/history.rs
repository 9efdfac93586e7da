//! Rebuilding game states by replay.
//!
//! Undo never inverts a move in place. It replays the truncated move list
//! from the game's starting position through the same legality pipeline
//! that accepted the moves originally.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveRequest};

/// Replays `moves` from `initial`. Returns `None` if any move is not legal
/// at its turn.
pub fn replay(initial: Position, moves: &[Move]) -> Option<GameState> {
    replay_requests(initial, moves.iter().map(MoveRequest::from))
}

pub fn replay_requests<I>(initial: Position, requests: I) -> Option<GameState>
where
    I: IntoIterator<Item = MoveRequest>,
{
    requests
        .into_iter()
        .try_fold(GameState::new(initial), |state, request| {
            state.find_legal_move(&request).map(|mv| state.play(mv))
        })
}
