//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! Exposes the value types and game state, legal move generation, notation
//! codecs (FEN, SAN, PGN, long algebraic), the alpha-beta search and its
//! engines, and the host-facing `ChessGame` controller.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod position;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod pawn_moves;
    pub mod perft;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_humanized;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod chess_game;
    pub mod history;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod san;
}

pub use engines::difficulty::{get_ai_move, get_ai_move_with_rng, Difficulty};
pub use game::chess_game::ChessGame;
pub use game_state::chess_types::{Color, GameState, GameStatus, Piece, PieceKind, Position, Square};
pub use moves::move_descriptions::{Move, MoveRequest};
