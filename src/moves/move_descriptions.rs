//! Move descriptions.
//!
//! A `Move` is produced by the generator and carries everything needed to
//! apply, annotate and display it. A `MoveRequest` is what a host submits:
//! origin, destination and an optional promotion choice.

use std::fmt;

use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
    /// SAN with check/mate suffix, filled in once the move is played.
    pub san: Option<String>,
}

impl Move {
    #[inline]
    pub fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            castling: None,
            en_passant: false,
            san: None,
        }
    }

    #[inline]
    pub fn capture(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            captured,
            ..Self::quiet(from, to, piece)
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }

    /// True when `request` names this move (same origin, destination and promotion).
    #[inline]
    pub fn matches(&self, request: &MoveRequest) -> bool {
        self.from == request.from && self.to == request.to && self.promotion == request.promotion
    }
}

/// Long algebraic text, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        MoveRequest::from(self).fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

impl From<&Move> for MoveRequest {
    fn from(mv: &Move) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        Self::from(&mv)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}
