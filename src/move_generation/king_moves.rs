//! King pseudo-legal move generation, including castling.
//!
//! Castling requires the right flag, empty squares between king and rook,
//! a king not in check, unattacked transit and landing squares, and the
//! matching rook still on its home square.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_OFFSETS};
use crate::moves::move_descriptions::Move;

const KING_HOME_COL: u8 = 4;

pub fn generate_king_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(&position.board, from, piece, &KING_OFFSETS, out);
    generate_castling_moves(position, from, piece, out);
}

fn generate_castling_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let side = piece.color;
    let home_row = side.home_row();
    if from != Square::new(home_row, KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(&position.board, from, side) {
        return;
    }

    for castling in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if position.castling_rights.has(side, castling) && can_castle(position, side, castling) {
            let to = Square::new(home_row, castling.king_to_col());
            out.push(Move {
                castling: Some(castling),
                ..Move::quiet(from, to, piece)
            });
        }
    }
}

fn can_castle(position: &Position, side: Color, castling: CastlingSide) -> bool {
    let board = &position.board;
    let row = side.home_row();

    let rook_home = Square::new(row, castling.rook_from_col());
    if board.get(rook_home) != Some(Piece::new(side, PieceKind::Rook)) {
        return false;
    }

    let (between, transit): (&[u8], &[u8]) = match castling {
        CastlingSide::Kingside => (&[5, 6], &[5, 6]),
        CastlingSide::Queenside => (&[1, 2, 3], &[3, 2]),
    };

    if between
        .iter()
        .any(|&col| !board.is_empty_at(Square::new(row, col)))
    {
        return false;
    }

    !transit
        .iter()
        .any(|&col| is_square_attacked(board, Square::new(row, col), side))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::Move;

    fn castles(fen: &str) -> Vec<CastlingSide> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let from = position
            .board
            .king_square(position.turn)
            .expect("king should be present");
        let piece = Piece::new(position.turn, PieceKind::King);
        let mut out: Vec<Move> = Vec::new();
        generate_king_moves(&position, from, piece, &mut out);
        out.iter().filter_map(|m| m.castling).collect()
    }

    #[test]
    fn both_sides_available_on_clear_back_rank() {
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(sides, vec![CastlingSide::Kingside, CastlingSide::Queenside]);
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(sides, vec![CastlingSide::Kingside, CastlingSide::Queenside]);
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1, the kingside transit square; g1 itself is safe.
        let sides = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(sides, vec![CastlingSide::Queenside]);
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        // Only the king's path matters: b1 may be attacked.
        let sides = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(sides, vec![CastlingSide::Queenside]);
    }

    #[test]
    fn no_castling_out_of_check_or_without_rook_or_right() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").is_empty());
    }
}
