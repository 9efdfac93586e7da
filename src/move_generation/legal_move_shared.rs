//! Geometry shared by the per-piece generators and the attack detector.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fixed-offset movers (knight, king): every on-board target not held by a friendly piece.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(to) {
            None => out.push(Move::quiet(from, to, piece)),
            Some(target) if target.color != piece.color => {
                out.push(Move::capture(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}

/// Sliders: walk each ray up to and including the first hostile piece.
pub fn push_ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(to) = cursor {
            match board.get(to) {
                None => out.push(Move::quiet(from, to, piece)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::capture(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            cursor = to.offset(d_row, d_col);
        }
    }
}

/// First occupied square along a ray, if any.
pub fn first_piece_on_ray(board: &Board, from: Square, d_row: i8, d_col: i8) -> Option<Piece> {
    let mut cursor = from.offset(d_row, d_col);
    while let Some(sq) = cursor {
        if let Some(piece) = board.get(sq) {
            return Some(piece);
        }
        cursor = sq.offset(d_row, d_col);
    }
    None
}
