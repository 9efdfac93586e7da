//! Standard Algebraic Notation.
//!
//! Generation works from the position before the move, since disambiguation
//! depends on which other pieces could reach the same square. Check and mate
//! suffixes are appended by `GameState::play` once the resulting status is known.

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves_for;
use crate::moves::move_descriptions::Move;

/// SAN for `mv` without a check or mate suffix.
pub fn move_to_san(position: &Position, mv: &Move) -> String {
    match mv.castling {
        Some(CastlingSide::Kingside) => return "O-O".to_string(),
        Some(CastlingSide::Queenside) => return "O-O-O".to_string(),
        None => {}
    }

    let mut san = String::with_capacity(8);

    match mv.piece.kind.san_letter() {
        Some(letter) => {
            san.push(letter);
            san.push_str(&disambiguation(position, mv));
        }
        None => {
            if mv.is_capture() {
                san.push(mv.from.file_char());
            }
        }
    }

    if mv.is_capture() {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if let Some(kind) = mv.promotion {
        san.push('=');
        if let Some(letter) = kind.san_letter() {
            san.push(letter);
        }
    }

    san
}

/// File, rank, or both, whichever first tells `mv` apart from rival moves
/// of the same piece type landing on the same square.
fn disambiguation(position: &Position, mv: &Move) -> String {
    let rivals: Vec<Square> = legal_moves_for(position, mv.piece.color)
        .into_iter()
        .filter(|other| other.piece == mv.piece && other.to == mv.to && other.from != mv.from)
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    if rivals.iter().all(|sq| sq.col != mv.from.col) {
        return mv.from.file_char().to_string();
    }
    if rivals.iter().all(|sq| sq.row != mv.from.row) {
        return mv.from.rank_char().to_string();
    }
    mv.from.to_string()
}

/// Finds the legal move for the side to move whose SAN matches `token`.
///
/// Tolerates annotation suffixes (`+`, `#`, `!`, `?`), zero-spelled castling
/// (`0-0`) and promotions written without `=` (`e8Q`).
pub fn find_move_by_san(position: &Position, token: &str) -> Result<Move, NotationError> {
    let wanted = normalize_san(token);
    if wanted.is_empty() {
        return Err(NotationError::IllegalSan(token.to_string()));
    }

    legal_moves_for(position, position.turn)
        .into_iter()
        .find(|mv| move_to_san(position, mv) == wanted)
        .ok_or_else(|| NotationError::IllegalSan(token.to_string()))
}

fn normalize_san(token: &str) -> String {
    let trimmed = token.trim_end_matches(['+', '#', '!', '?']);

    let castling = trimmed.replace('0', "O");
    if castling == "O-O" || castling == "O-O-O" {
        return castling;
    }

    let mut san = trimmed.to_string();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 3 {
        let last = bytes[bytes.len() - 1] as char;
        let before = bytes[bytes.len() - 2];
        if matches!(last, 'Q' | 'R' | 'B' | 'N') && before.is_ascii_digit() {
            san.insert(san.len() - 1, '=');
        }
    }
    san
}

#[cfg(test)]
mod tests {
    use super::{find_move_by_san, move_to_san};
    use crate::chess_errors::NotationError;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::legal_moves_for;
    use crate::moves::move_descriptions::{Move, MoveRequest};

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("FEN should parse")
    }

    fn san_of(fen: &str, lan: &str) -> String {
        let position = position(fen);
        let request: MoveRequest = lan.parse().expect("LAN should parse");
        let mv: Move = legal_moves_for(&position, position.turn)
            .into_iter()
            .find(|m| m.matches(&request))
            .expect("move should be legal");
        move_to_san(&position, &mv)
    }

    #[test]
    fn basic_piece_and_pawn_moves() {
        let start = crate::game_state::chess_rules::STARTING_POSITION_FEN;
        assert_eq!(san_of(start, "e2e4"), "e4");
        assert_eq!(san_of(start, "g1f3"), "Nf3");
        assert_eq!(
            san_of("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2", "e4d5"),
            "exd5"
        );
    }

    #[test]
    fn castling_and_promotion() {
        assert_eq!(san_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"), "O-O");
        assert_eq!(san_of("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8c8"), "O-O-O");
        assert_eq!(san_of("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7b8q"), "axb8=Q");
        assert_eq!(san_of("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8n"), "a8=N");
    }

    #[test]
    fn en_passant_reads_as_pawn_capture() {
        assert_eq!(san_of("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", "e5d6"), "exd6");
    }

    #[test]
    fn disambiguates_by_file_then_rank_then_both() {
        // Knights on b1 and f1 both reach d2: file suffices.
        assert_eq!(san_of("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1d2"), "Nbd2");
        // Rooks on a1 and a5 share the file: rank is needed.
        assert_eq!(san_of("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "a1a3"), "R1a3");
        // Queens on a1, c1 and a3 all reach b2: a1 needs file and rank.
        assert_eq!(san_of("4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1", "a1b2"), "Qa1b2");
    }

    #[test]
    fn san_lookup_tolerates_suffixes_and_variants() {
        let castle = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = find_move_by_san(&castle, "0-0").expect("zero castling should parse");
        assert_eq!(mv.castling, Some(CastlingSide::Kingside));

        let promote = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let mv = find_move_by_san(&promote, "a8Q+").expect("promotion without '=' should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));

        let start = Position::starting();
        let mv = find_move_by_san(&start, "Nf3!?").expect("annotated move should parse");
        assert_eq!(mv.to.to_string(), "f3");
    }

    #[test]
    fn san_lookup_rejects_illegal_tokens() {
        let start = Position::starting();
        assert_eq!(
            find_move_by_san(&start, "e5"),
            Err(NotationError::IllegalSan("e5".to_string()))
        );
        assert!(find_move_by_san(&start, "").is_err());
    }
}
