//! Rook pseudo-legal move generation.
//!
//! Rays stop at the first occupied square, which is included only when it
//! holds an enemy piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_moves, ROOK_DIRECTIONS};
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_ray_moves(&position.board, from, piece, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_ray_stops_at_blockers() {
        // Rook d4, own pawn d6, enemy knight f4.
        let position =
            Position::from_fen("4k3/8/3P4/8/3R1n2/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(
            &position,
            Square::new(4, 3),
            Piece::new(Color::White, PieceKind::Rook),
            &mut out,
        );

        let targets: Vec<String> = out.iter().map(|m| m.to.to_string()).collect();
        assert!(targets.contains(&"d5".to_owned()));
        assert!(!targets.contains(&"d6".to_owned()));
        assert!(targets.contains(&"f4".to_owned()));
        assert!(!targets.contains(&"g4".to_owned()));
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
        // d5, e4, f4, c4, b4, a4, d3, d2, d1
        assert_eq!(out.len(), 9);
    }
}
