//! Knight pseudo-legal move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_OFFSETS};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(&position.board, from, piece, &KNIGHT_OFFSETS, out);
}
