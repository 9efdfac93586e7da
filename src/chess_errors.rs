//! Errors returned by the notation codecs.
//!
//! Rule violations during play (illegal moves, empty undo stacks) are not
//! errors: the `ChessGame` surface reports them as `false`. These types cover
//! malformed text handed to the FEN, square, SAN, long algebraic and PGN
//! parsers, and are propagated with `?` through the codec layer.

use thiserror::Error;

/// FEN text could not be turned into a position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have six space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field '{0}'")]
    InvalidTurn(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant field '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid {field} counter '{value}'")]
    InvalidCounter { field: &'static str, value: String },

    #[error("{0} king count must be exactly one")]
    KingCount(crate::game_state::chess_types::Color),
}

/// Square, SAN or long algebraic text that does not name a legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square '{0}'")]
    InvalidSquare(String),

    #[error("invalid long algebraic move '{0}'")]
    InvalidLongAlgebraic(String),

    #[error("'{0}' does not match any legal move")]
    IllegalSan(String),
}

/// PGN text that could not be replayed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PgnError {
    #[error("invalid tag pair: {0}")]
    InvalidTag(String),

    #[error("SetUp tag present but FEN tag missing")]
    MissingFen,

    #[error("invalid FEN tag: {0}")]
    Fen(#[from] FenError),

    #[error("move {ply}: {source}")]
    Move {
        ply: usize,
        #[source]
        source: NotationError,
    },

    #[error("move {ply} '{token}' played after the game was already over")]
    GameOver { ply: usize, token: String },
}

/// Difficulty name other than `easy`, `medium` or `hard`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);
