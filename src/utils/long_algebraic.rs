//! Long algebraic (UCI-style) move text.
//!
//! `e2e4`, `e1g1` for castling, `e7e8q` for promotion. Parsing only checks the
//! syntax; legality is decided when the request is submitted.

use std::str::FromStr;

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveRequest;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move_request(long_algebraic: &str) -> Result<MoveRequest, NotationError> {
    let invalid = || NotationError::InvalidLongAlgebraic(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let mut request = MoveRequest::new(from, to);

    if let Some(ch) = long_algebraic[4..].chars().next() {
        let promotion = PieceKind::from_char(ch)
            .filter(|kind| !matches!(kind, PieceKind::Pawn | PieceKind::King))
            .ok_or_else(invalid)?;
        request = request.with_promotion(promotion);
    }

    Ok(request)
}

impl FromStr for MoveRequest {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move_request(s)
    }
}
