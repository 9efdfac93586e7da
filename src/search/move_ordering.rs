//! Captures-first move ordering.
//!
//! Higher-value victims are tried first; the sort is stable so quiet moves and
//! equal-value captures keep generator order. Ordering only affects how much
//! alpha-beta prunes, never the value it returns.

use std::cmp::Reverse;

use crate::moves::move_descriptions::Move;

#[inline]
pub fn capture_value(mv: &Move) -> i32 {
    mv.captured.map_or(0, |piece| piece.kind.value())
}

pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(capture_value(mv)));
}
