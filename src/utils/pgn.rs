//! PGN read/write utilities for game history interchange.
//!
//! Export writes the seven-tag roster followed by numbered SAN movetext.
//! Import replays SAN tokens through the legal move generator and fails as a
//! whole on the first token that does not name a legal move.

use chrono::Local;

use crate::chess_errors::PgnError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::san::{find_move_by_san, move_to_san};

const MAX_LINE_WIDTH: usize = 80;

/// Tag values for export. `date: None` stamps the local date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnHeaders {
    pub event: String,
    pub site: String,
    pub date: Option<String>,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Default for PgnHeaders {
    fn default() -> Self {
        Self {
            event: "Casual Game".to_owned(),
            site: "Local".to_owned(),
            date: None,
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
        }
    }
}

impl PgnHeaders {
    /// Headers carried over from imported tag pairs. Tags that are absent
    /// keep their defaults; `Result`, `SetUp` and `FEN` are derived on export.
    pub fn from_tags(tags: &[(String, String)]) -> Self {
        let mut headers = Self::default();
        for (key, value) in tags {
            let field = match key.as_str() {
                "Event" => &mut headers.event,
                "Site" => &mut headers.site,
                "Round" => &mut headers.round,
                "White" => &mut headers.white,
                "Black" => &mut headers.black,
                "Date" => {
                    headers.date = Some(value.clone());
                    continue;
                }
                _ => continue,
            };
            *field = value.clone();
        }
        headers
    }
}

#[derive(Debug, Clone)]
pub struct PgnGame {
    /// Tag pairs in file order.
    pub tags: Vec<(String, String)>,
    pub initial_position: Position,
    pub final_state: GameState,
}

impl PgnGame {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Result token for a status: decisive only for checkmate, drawn for any draw.
pub fn result_token(status: GameStatus, turn: Color) -> &'static str {
    match status {
        GameStatus::Checkmate => match turn {
            Color::White => "0-1",
            Color::Black => "1-0",
        },
        GameStatus::Stalemate | GameStatus::DrawRepetition | GameStatus::Draw50Move => "1/2-1/2",
        GameStatus::Active
        | GameStatus::Check
        | GameStatus::Resigned(_)
        | GameStatus::Timeout(_) => "*",
    }
}

/// Writes `state`, which was played out from `initial`, as PGN text.
pub fn write_pgn(initial: &Position, state: &GameState, headers: &PgnHeaders) -> String {
    let result = result_token(state.status, state.position.turn);
    let date = headers
        .date
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y.%m.%d").to_string());

    let mut tags: Vec<(&str, String)> = vec![
        ("Event", headers.event.clone()),
        ("Site", headers.site.clone()),
        ("Date", date),
        ("Round", headers.round.clone()),
        ("White", headers.white.clone()),
        ("Black", headers.black.clone()),
        ("Result", result.to_owned()),
    ];
    let initial_fen = initial.to_fen();
    if initial_fen != STARTING_POSITION_FEN {
        tags.push(("SetUp", "1".to_owned()));
        tags.push(("FEN", initial_fen));
    }

    let mut out = String::new();
    for (key, value) in &tags {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut tokens = movetext_tokens(initial, state);
    tokens.push(result.to_owned());
    out.push_str(&wrap_tokens(&tokens));
    out.push('\n');

    out
}

fn movetext_tokens(initial: &Position, state: &GameState) -> Vec<String> {
    let mut tokens = Vec::with_capacity(state.move_history.len() * 3 / 2 + 1);
    let mut position = *initial;

    for (ply, mv) in state.move_history.iter().enumerate() {
        let number = position.fullmove_number;
        match position.turn {
            Color::White => tokens.push(format!("{number}.")),
            Color::Black if ply == 0 => tokens.push(format!("{number}...")),
            Color::Black => {}
        }
        let san = mv
            .san
            .clone()
            .unwrap_or_else(|| move_to_san(&position, mv));
        tokens.push(san);
        position = apply_move(&position, mv);
    }

    tokens
}

fn wrap_tokens(tokens: &[String]) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for token in tokens {
        if line_len > 0 && line_len + 1 + token.len() > MAX_LINE_WIDTH {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(token);
        line_len += token.len();
    }
    out
}

/// Parses PGN text and replays its moves.
///
/// Honours `SetUp`/`FEN` tags. Tag pairs may appear anywhere, several to a
/// line. Comments, variations, NAGs, move numbers and result tokens are
/// skipped.
pub fn read_pgn(pgn: &str) -> Result<PgnGame, PgnError> {
    let (tags, movetext) = split_tags_and_movetext(pgn)?;

    let tag = |name: &str| {
        tags.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };
    let initial_position = match (tag("SetUp"), tag("FEN")) {
        (Some("1"), None) => return Err(PgnError::MissingFen),
        (_, Some(fen)) => Position::from_fen(fen)?,
        _ => Position::starting(),
    };

    let mut state = GameState::new(initial_position);
    let mut ply = 0usize;

    for raw in movetext.split_whitespace() {
        let Some(token) = san_token(raw) else {
            continue;
        };
        ply += 1;

        if state.status.is_terminal() {
            return Err(PgnError::GameOver {
                ply,
                token: token.to_owned(),
            });
        }
        let mv = find_move_by_san(&state.position, token)
            .map_err(|source| PgnError::Move { ply, source })?;
        state = state.play(mv);
    }

    Ok(PgnGame {
        tags,
        initial_position,
        final_state: state,
    })
}

/// Pulls out `[Key "value"]` pairs and drops `{}` and `;` comments, `()`
/// variations and `%` escape lines. What remains is bare movetext.
fn split_tags_and_movetext(pgn: &str) -> Result<(Vec<(String, String)>, String), PgnError> {
    let mut tags = Vec::new();
    let mut movetext = String::with_capacity(pgn.len());
    let mut chars = pgn.chars();
    let mut paren_depth = 0usize;
    let mut line_start = true;

    while let Some(ch) = chars.next() {
        match ch {
            '%' if line_start => {
                skip_past(&mut chars, '\n');
                continue;
            }
            ';' => {
                skip_past(&mut chars, '\n');
                movetext.push(' ');
                line_start = true;
                continue;
            }
            '{' => {
                skip_past(&mut chars, '}');
                movetext.push(' ');
            }
            '(' => paren_depth += 1,
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                movetext.push(' ');
            }
            '[' if paren_depth == 0 => {
                tags.push(parse_tag(&read_bracketed(&mut chars))?);
                movetext.push(' ');
            }
            _ if paren_depth == 0 => movetext.push(ch),
            _ => {}
        }
        line_start = ch == '\n';
    }

    Ok((tags, movetext))
}

fn skip_past(chars: &mut std::str::Chars<'_>, end: char) {
    for ch in chars.by_ref() {
        if ch == end {
            break;
        }
    }
}

/// Reads up to and including the `]` that closes a tag pair, respecting
/// quoted values and `\"` escapes. Returns the text with its brackets.
fn read_bracketed(chars: &mut std::str::Chars<'_>) -> String {
    let mut raw = String::from("[");
    let mut in_quotes = false;
    while let Some(ch) = chars.next() {
        raw.push(ch);
        match ch {
            '\\' if in_quotes => {
                if let Some(escaped) = chars.next() {
                    raw.push(escaped);
                }
            }
            '"' => in_quotes = !in_quotes,
            ']' if !in_quotes => break,
            _ => {}
        }
    }
    raw
}

/// The SAN part of a movetext token, or `None` for numbers, NAGs and results.
fn san_token(raw: &str) -> Option<&str> {
    if is_result_token(raw) || raw.starts_with('$') || raw == "e.p." {
        return None;
    }
    // "12." / "12..." / glued "12.Nf3"
    let token = match raw.rfind('.') {
        Some(idx) if raw[..idx].trim_end_matches('.').chars().all(|c| c.is_ascii_digit()) => {
            &raw[idx + 1..]
        }
        _ => raw,
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn parse_tag(raw: &str) -> Result<(String, String), PgnError> {
    let invalid = || PgnError::InvalidTag(raw.to_owned());

    let inner = raw
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.trim().split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;

    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{read_pgn, result_token, write_pgn, PgnHeaders};
    use crate::chess_errors::{NotationError, PgnError};
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveRequest;

    fn headers() -> PgnHeaders {
        PgnHeaders {
            date: Some("2024.01.02".to_owned()),
            ..PgnHeaders::default()
        }
    }

    fn play_all(state: GameState, moves: &[&str]) -> GameState {
        moves.iter().fold(state, |state, lan| {
            let request: MoveRequest = lan.parse().expect("LAN should parse");
            let mv = state.find_legal_move(&request).expect("move should be legal");
            state.play(mv)
        })
    }

    #[test]
    fn exports_seven_tags_and_numbered_movetext() {
        let initial = Position::starting();
        let state = play_all(GameState::new(initial), &["f2f4", "e7e5", "g2g4", "d8h4"]);
        let pgn = write_pgn(&initial, &state, &headers());

        let expected = "[Event \"Casual Game\"]\n\
                        [Site \"Local\"]\n\
                        [Date \"2024.01.02\"]\n\
                        [Round \"-\"]\n\
                        [White \"White\"]\n\
                        [Black \"Black\"]\n\
                        [Result \"0-1\"]\n\
                        \n\
                        1. f4 e5 2. g4 Qh4# 0-1\n";
        assert_eq!(pgn, expected);
    }

    #[test]
    fn custom_start_adds_setup_and_black_first_numbering() {
        let initial =
            Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 12").expect("FEN should parse");
        let state = play_all(GameState::new(initial), &["e8d7", "e2e4"]);
        let pgn = write_pgn(&initial, &state, &headers());

        assert!(pgn.contains("[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 12\"]\n"));
        assert!(pgn.ends_with("12... Kd7 13. e4 *\n"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.initial_position, initial);
        assert_eq!(parsed.final_state, state);
    }

    #[test]
    fn import_round_trips_and_skips_annotations() {
        let text = "[Event \"Test\"]\n[Result \"*\"]\n\n\
                    1.e4 {king pawn} e5 2. Nf3 (2. f4 exf4) Nc6 $1 3. Bb5 a6!? *";
        let parsed = read_pgn(text).expect("PGN should parse");
        assert_eq!(parsed.tag("Event"), Some("Test"));
        assert_eq!(parsed.final_state.move_history.len(), 6);
        assert_eq!(
            parsed.final_state.to_fen(),
            "r1bqkbnr/1ppp1ppp/p1n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 4"
        );

        let expected = play_all(
            GameState::default(),
            &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6"],
        );
        assert_eq!(parsed.final_state, expected);
    }

    #[test]
    fn tags_may_share_a_line_with_movetext() {
        let parsed =
            read_pgn("[Event \"x\"] [White \"Ann [A]\"] 1. e4 e5 *").expect("PGN should parse");
        assert_eq!(parsed.tag("Event"), Some("x"));
        assert_eq!(parsed.tag("White"), Some("Ann [A]"));
        assert_eq!(parsed.final_state.move_history.len(), 2);
    }

    #[test]
    fn semicolon_comments_run_to_end_of_line() {
        let parsed =
            read_pgn("1. e4 ; 1... c5 is the Sicilian\n e5 2. Nf3 *").expect("PGN should parse");
        let expected = play_all(GameState::default(), &["e2e4", "e7e5", "g1f3"]);
        assert_eq!(parsed.final_state, expected);
    }

    #[test]
    fn headers_from_imported_tags() {
        let text = "[Event \"Club\"]\n[Date \"2023.05.06\"]\n[Black \"Bo\"]\n[Result \"*\"]\n\n*";
        let parsed = read_pgn(text).expect("PGN should parse");
        let headers = PgnHeaders::from_tags(&parsed.tags);
        assert_eq!(
            headers,
            PgnHeaders {
                event: "Club".to_owned(),
                date: Some("2023.05.06".to_owned()),
                black: "Bo".to_owned(),
                ..PgnHeaders::default()
            }
        );
    }

    #[test]
    fn illegal_token_reports_ply() {
        let err = read_pgn("1. e4 e5 2. Ke3").expect_err("Ke3 is illegal");
        assert_eq!(
            err,
            PgnError::Move {
                ply: 3,
                source: NotationError::IllegalSan("Ke3".to_owned()),
            }
        );
    }

    #[test]
    fn setup_without_fen_is_rejected() {
        let err = read_pgn("[SetUp \"1\"]\n\n1. e4 *").expect_err("FEN tag missing");
        assert_eq!(err, PgnError::MissingFen);
        assert!(matches!(read_pgn("[Event Test]\n1. e4"), Err(PgnError::InvalidTag(_))));
    }

    #[test]
    fn moves_after_mate_are_rejected() {
        let err = read_pgn("1. f3 e5 2. g4 Qh4# 3. a3").expect_err("game already over");
        assert_eq!(
            err,
            PgnError::GameOver {
                ply: 5,
                token: "a3".to_owned(),
            }
        );
    }

    #[test]
    fn result_tokens_follow_status() {
        assert_eq!(result_token(GameStatus::Checkmate, Color::Black), "1-0");
        assert_eq!(result_token(GameStatus::Checkmate, Color::White), "0-1");
        assert_eq!(result_token(GameStatus::DrawRepetition, Color::White), "1/2-1/2");
        assert_eq!(result_token(GameStatus::Stalemate, Color::Black), "1/2-1/2");
        assert_eq!(result_token(GameStatus::Resigned(Color::White), Color::White), "*");
        assert_eq!(result_token(GameStatus::Check, Color::White), "*");
    }
}
