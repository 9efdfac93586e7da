//! Pawn pseudo-legal move generation.
//!
//! Single and double pushes, diagonal captures, en passant, and promotion
//! expansion into one move per promotion piece.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

pub fn generate_pawn_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let board = &position.board;
    let side = piece.color;
    let dir = side.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty_at(one_step) {
            push_with_promotions(Move::quiet(from, one_step, piece), side, out);

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::quiet(from, two_step, piece));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        match board.get(to) {
            Some(target) if target.color != side => {
                push_with_promotions(Move::capture(from, to, piece, Some(target)), side, out);
            }
            Some(_) => {}
            None if position.en_passant == Some(to) => {
                // The passed pawn stands beside us, on the target's file.
                let victim_square = Square::new(from.row, to.col);
                let victim = board.get(victim_square);
                if victim == Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
                    out.push(Move {
                        en_passant: true,
                        ..Move::capture(from, to, piece, victim)
                    });
                }
            }
            None => {}
        }
    }
}

fn push_with_promotions(mv: Move, side: Color, out: &mut Vec<Move>) {
    if mv.to.row != side.promotion_row() {
        out.push(mv);
        return;
    }

    for promotion in PROMOTION_KINDS {
        out.push(Move {
            promotion: Some(promotion),
            ..mv.clone()
        });
    }
}
