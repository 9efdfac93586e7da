//! Full legal move generation pipeline.
//!
//! Dispatches per piece kind to the pseudo-legal generators, then drops every
//! move that leaves the mover's own king attacked. The color is always passed
//! explicitly; nothing here touches `Position::turn`.

use crate::game_state::chess_types::*;
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Geometrically possible moves for the `color` piece on `from`, ignoring self-check.
pub fn pseudo_moves_from(position: &Position, from: Square, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    push_pseudo_moves(position, from, color, &mut out);
    out
}

fn push_pseudo_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let Some(piece) = position.board.get(from) else {
        return;
    };
    if piece.color != color {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, piece, out),
        PieceKind::Rook => generate_rook_moves(position, from, piece, out),
        PieceKind::Queen => generate_queen_moves(position, from, piece, out),
        PieceKind::King => generate_king_moves(position, from, piece, out),
    }
}

/// A pseudo-legal move is legal when the mover's king is safe afterwards.
#[inline]
pub fn is_legal(position: &Position, mv: &Move) -> bool {
    let next = apply_move(position, mv);
    !is_in_check(&next.board, mv.piece.color)
}

pub fn legal_moves_from(position: &Position, from: Square, color: Color) -> Vec<Move> {
    let mut moves = pseudo_moves_from(position, from, color);
    moves.retain(|mv| is_legal(position, mv));
    moves
}

pub fn legal_moves_for(position: &Position, color: Color) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    for (from, _) in position.board.pieces_of(color) {
        push_pseudo_moves(position, from, color, &mut pseudo);
    }
    pseudo.retain(|mv| is_legal(position, mv));
    pseudo
}

/// Short-circuits on the first legal move found.
pub fn has_legal_move(position: &Position, color: Color) -> bool {
    let mut pseudo = Vec::with_capacity(32);
    for (from, _) in position.board.pieces_of(color) {
        pseudo.clear();
        push_pseudo_moves(position, from, color, &mut pseudo);
        if pseudo.iter().any(|mv| is_legal(position, mv)) {
            return true;
        }
    }
    false
}
