//! Queen pseudo-legal move generation: union of rook and bishop rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_ray_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(&position.board, from, piece, &BISHOP_DIRECTIONS, out);
    push_ray_moves(&position.board, from, piece, &ROOK_DIRECTIONS, out);
}
