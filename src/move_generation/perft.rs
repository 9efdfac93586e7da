//! Perft: exhaustive leaf counting used to validate move generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves_for};
use crate::moves::move_descriptions::Move;

/// Published leaf counts of a well-known test position. `nodes[d - 1]` is
/// the count at depth `d`.
#[derive(Debug, Clone, Copy)]
pub struct PerftReference {
    pub name: &'static str,
    pub fen: &'static str,
    pub nodes: &'static [usize],
}

pub const PERFT_REFERENCES: &[PerftReference] = &[
    PerftReference {
        name: "start",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        nodes: &[20, 400, 8902, 197_281],
    },
    PerftReference {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes: &[48, 2039, 97_862],
    },
    PerftReference {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes: &[14, 191, 2812, 43_238],
    },
    PerftReference {
        name: "promotions",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        nodes: &[6, 264, 9467],
    },
    PerftReference {
        name: "discovered_checks",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        nodes: &[44, 1486, 62_379],
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count only; cheaper than [`perft_detailed`].
pub fn perft(position: &Position, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_for(position, position.turn);
    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|mv| perft(&apply_move(position, mv), depth - 1))
        .sum()
}

/// Leaf count plus per-leaf move classification.
pub fn perft_detailed(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves_for(position, position.turn) {
        let next = apply_move(position, &mv);
        if depth == 1 {
            total.merge(classify_leaf(&mv, &next));
        } else {
            total.merge(perft_detailed(&next, depth - 1));
        }
    }

    total
}

fn classify_leaf(mv: &Move, next: &Position) -> PerftCounts {
    let gives_check = is_in_check(&next.board, next.turn);
    PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(mv.en_passant),
        castles: usize::from(mv.castling.is_some()),
        promotions: usize::from(mv.promotion.is_some()),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && !has_legal_move(next, next.turn)),
    }
}

/// Per-root-move leaf counts, sorted by long algebraic text.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = legal_moves_for(position, position.turn)
        .iter()
        .map(|mv| {
            let next = apply_move(position, mv);
            (mv.to_string(), perft(&next, depth.saturating_sub(1)))
        })
        .collect();
    out.sort();
    out
}
