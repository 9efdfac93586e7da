//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the draw thresholds used by the status classifier.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without a pawn move or capture that end the game (fifty full moves).
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of the same position key that end the game.
pub const REPETITION_LIMIT: usize = 3;
