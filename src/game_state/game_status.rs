//! Status classifier.
//!
//! Evaluated against the side to move after every transition, in fixed
//! priority order: no legal moves, fifty-move rule, repetition, check.
//! Resignation and timeout never come from here; they are forced by the host.

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Classifies `position` given the repetition keys recorded so far
/// (which must already include `position`'s own key).
pub fn classify_status(position: &Position, position_history: &[PositionKey]) -> GameStatus {
    let side = position.turn;
    let in_check = is_in_check(&position.board, side);

    if !has_legal_move(position, side) {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        return GameStatus::Draw50Move;
    }

    if repetition_count(&position.key(), position_history) >= REPETITION_LIMIT {
        return GameStatus::DrawRepetition;
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Active
    }
}

#[inline]
pub fn repetition_count(key: &PositionKey, position_history: &[PositionKey]) -> usize {
    position_history.iter().filter(|k| *k == key).count()
}

#[cfg(test)]
mod tests {
    use super::classify_status;
    use crate::game_state::chess_types::*;

    fn classify(fen: &str) -> GameStatus {
        let position = Position::from_fen(fen).expect("FEN should parse");
        classify_status(&position, &[position.key()])
    }

    #[test]
    fn mate_and_stalemate_need_no_legal_moves() {
        assert_eq!(
            classify("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            GameStatus::Checkmate
        );
        assert_eq!(classify("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn fifty_move_rule_at_one_hundred_halfmoves() {
        assert_eq!(classify("4k3/8/8/8/8/8/8/R3K3 w - - 99 80"), GameStatus::Active);
        assert_eq!(classify("4k3/8/8/8/8/8/8/R3K3 w - - 100 80"), GameStatus::Draw50Move);
    }

    #[test]
    fn mate_outranks_the_fifty_move_rule() {
        // Back-rank mate delivered on the hundredth halfmove.
        assert_eq!(
            classify("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 90"),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn repetition_needs_three_occurrences() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 4 10").expect("FEN should parse");
        let key = position.key();
        assert_eq!(classify_status(&position, &[key, key]), GameStatus::Active);
        assert_eq!(
            classify_status(&position, &[key, key, key]),
            GameStatus::DrawRepetition
        );
    }

    #[test]
    fn check_is_not_terminal() {
        assert_eq!(classify("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1"), GameStatus::Check);
    }
}
