//! Bishop pseudo-legal move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_moves, BISHOP_DIRECTIONS};
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(&position.board, from, piece, &BISHOP_DIRECTIONS, out);
}
