//! Immutable game state snapshots.
//!
//! `GameState` pairs the FEN-level `Position` with the move list, the
//! repetition key history and the classified status. Every accepted move
//! produces a new value; a snapshot a caller holds is never mutated.

use crate::chess_errors::FenError;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::classify_status;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{legal_moves_for, legal_moves_from};
use crate::moves::move_descriptions::{Move, MoveRequest};
use crate::utils::san::move_to_san;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    pub move_history: Vec<Move>,
    pub position_history: Vec<PositionKey>,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Position::starting())
    }
}

impl GameState {
    /// Fresh game from `position` with empty move history.
    pub fn new(position: Position) -> Self {
        let position_history = vec![position.key()];
        let status = classify_status(&position, &position_history);
        Self {
            position,
            move_history: Vec::new(),
            position_history,
            status,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::new)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.position.turn
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Legal moves for the piece on `square`, if it belongs to the side to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        legal_moves_from(&self.position, square, self.position.turn)
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        legal_moves_for(&self.position, color)
    }

    /// Resolves a request against the current legal moves of the side to move.
    pub fn find_legal_move(&self, request: &MoveRequest) -> Option<Move> {
        if self.status.is_terminal() {
            return None;
        }
        legal_moves_from(&self.position, request.from, self.position.turn)
            .into_iter()
            .find(|mv| mv.matches(request))
    }

    /// Applies a move already known to be legal and returns the successor state.
    ///
    /// The recorded move carries its SAN, including `+` or `#` when the
    /// resulting status is check or checkmate.
    pub fn play(&self, mv: Move) -> GameState {
        let mut san = move_to_san(&self.position, &mv);

        let position = apply_move(&self.position, &mv);

        let mut position_history = Vec::with_capacity(self.position_history.len() + 1);
        position_history.extend_from_slice(&self.position_history);
        position_history.push(position.key());

        let status = classify_status(&position, &position_history);
        match status {
            GameStatus::Checkmate => san.push('#'),
            GameStatus::Check => san.push('+'),
            _ => {}
        }

        let mut move_history = Vec::with_capacity(self.move_history.len() + 1);
        move_history.extend_from_slice(&self.move_history);
        move_history.push(Move {
            san: Some(san),
            ..mv
        });

        GameState {
            position,
            move_history,
            position_history,
            status,
        }
    }

    /// Same board and history, with a forced status.
    pub fn with_status(&self, status: GameStatus) -> GameState {
        GameState {
            status,
            ..self.clone()
        }
    }
}
