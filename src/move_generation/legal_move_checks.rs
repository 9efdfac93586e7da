//! Attack and check detection.
//!
//! Looks outward from the target square: pawns attack diagonally only, other
//! pieces attack every square they could move to (castling excluded).

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    first_piece_on_ray, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

/// True when any piece of `defender`'s opponent attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let attacker = defender.opposite();

    // An attacking pawn sits one row behind the square, relative to its own direction.
    let pawn = Piece::new(attacker, PieceKind::Pawn);
    for d_col in [-1i8, 1i8] {
        if square
            .offset(-attacker.pawn_direction(), d_col)
            .is_some_and(|sq| board.get(sq) == Some(pawn))
        {
            return true;
        }
    }

    if any_piece_at_offsets(board, square, &KNIGHT_OFFSETS, Piece::new(attacker, PieceKind::Knight))
        || any_piece_at_offsets(board, square, &KING_OFFSETS, Piece::new(attacker, PieceKind::King))
    {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&(d_row, d_col)| {
            first_piece_on_ray(board, square, d_row, d_col).is_some_and(|p| {
                p.color == attacker && (p.kind == kind || p.kind == PieceKind::Queen)
            })
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}

#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color)
}

fn any_piece_at_offsets(board: &Board, square: Square, offsets: &[(i8, i8)], piece: Piece) -> bool {
    offsets.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .is_some_and(|sq| board.get(sq) == Some(piece))
    })
}
