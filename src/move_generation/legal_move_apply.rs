//! Position transition for a single move.
//!
//! `apply_move` is the only place board contents, castling rights, the
//! en-passant target, clocks and the side to move change. The legality filter,
//! `GameState::play`, perft and search all go through it.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Applies a pseudo-legal move to a copy of `position` and returns the copy.
pub fn apply_move(position: &Position, mv: &Move) -> Position {
    let mut next = *position;
    let moving_color = mv.piece.color;

    next.board.take(mv.from);

    if mv.en_passant {
        // Captured pawn stands on the origin row, destination file.
        next.board.take(Square::new(mv.from.row, mv.to.col));
    }

    let placed = match mv.promotion {
        Some(kind) => Piece::new(moving_color, kind),
        None => mv.piece,
    };
    next.board.set(mv.to, Some(placed));

    if let Some(castling) = mv.castling {
        let row = mv.from.row;
        let rook = next.board.take(Square::new(row, castling.rook_from_col()));
        next.board.set(Square::new(row, castling.rook_to_col()), rook);
    }

    update_castling_rights(&mut next.castling_rights, mv);

    next.en_passant = if mv.is_double_pawn_push() {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };

    if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.turn = moving_color.opposite();

    next
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &Move) {
    let mover = mv.piece.color;

    match mv.piece.kind {
        PieceKind::King => rights.revoke_all(mover),
        PieceKind::Rook => {
            if let Some(side) = rook_home_side(mover, mv.from) {
                rights.revoke(mover, side);
            }
        }
        _ => {}
    }

    if let Some(captured) = mv.captured {
        if captured.kind == PieceKind::Rook {
            if let Some(side) = rook_home_side(captured.color, mv.to) {
                rights.revoke(captured.color, side);
            }
        }
    }
}

/// Castling side whose rook starts on `square`, if `square` is a home corner for `color`.
fn rook_home_side(color: Color, square: Square) -> Option<CastlingSide> {
    if square.row != color.home_row() {
        return None;
    }
    [CastlingSide::Kingside, CastlingSide::Queenside]
        .into_iter()
        .find(|side| side.rook_from_col() == square.col)
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::legal_moves_for;
    use crate::moves::move_descriptions::{Move, MoveRequest};

    fn find(position: &Position, lan: &str) -> Move {
        let request: MoveRequest = lan.parse().expect("LAN should parse");
        legal_moves_for(position, position.turn)
            .into_iter()
            .find(|m| m.matches(&request))
            .expect("move should be legal")
    }

    fn play(fen: &str, moves: &[&str]) -> Position {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        for lan in moves {
            let mv = find(&position, lan);
            position = apply_move(&position, &mv);
        }
        position
    }

    #[test]
    fn double_push_sets_and_next_ply_clears_en_passant() {
        let start = crate::game_state::chess_rules::STARTING_POSITION_FEN;
        let after = play(start, &["e2e4"]);
        assert_eq!(after.en_passant, Some("e3".parse().expect("square")));
        assert_eq!(after.turn, Color::Black);
        assert_eq!(after.fullmove_number, 1);

        let after = play(start, &["e2e4", "g8f6"]);
        assert_eq!(after.en_passant, None);
        assert_eq!(after.fullmove_number, 2);
        assert_eq!(after.halfmove_clock, 1);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let after = play("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", &["e5d6"]);
        assert_eq!(after.to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let after = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 1", &["e1g1"]);
        assert_eq!(after.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 1");

        let after = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", &["e8c8"]);
        assert_eq!(after.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
    }

    #[test]
    fn rook_moves_and_rook_captures_revoke_matching_rights() {
        let after = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["h1h8"]);
        assert_eq!(after.to_fen(), "r3k2R/8/8/8/8/8/8/R3K3 b Qq - 0 1");

        let after = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["a1a2"]);
        assert_eq!(after.castling_rights.bits() & CASTLE_WHITE_QUEENSIDE, 0);
        assert!(after.castling_rights.has(Color::White, CastlingSide::Kingside));
    }

    #[test]
    fn promotion_places_chosen_piece() {
        let after = play("4k3/P7/8/8/8/8/8/4K3 w - - 5 40", &["a7a8n"]);
        assert_eq!(after.to_fen(), "N3k3/8/8/8/8/8/8/4K3 b - - 0 40");
    }
}
