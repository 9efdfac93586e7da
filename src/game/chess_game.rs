//! Host-facing game controller.
//!
//! `ChessGame` owns the authoritative `GameState`, the starting position it
//! was played from and the redo stack. Rule violations are reported as
//! `false` and leave everything unchanged; only malformed FEN passed to
//! `reset` is an error.

use tracing::{debug, info};

use crate::chess_errors::FenError;
use crate::engines::difficulty::{get_ai_move, Difficulty};
use crate::game::history::replay;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveRequest};
use crate::utils::pgn::{read_pgn, write_pgn, PgnHeaders};

#[derive(Debug, Clone)]
pub struct ChessGame {
    initial_position: Position,
    state: GameState,
    redo_stack: Vec<Move>,
    pgn_headers: PgnHeaders,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::from_position(Position::starting())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    fn from_position(initial_position: Position) -> Self {
        Self {
            initial_position,
            state: GameState::new(initial_position),
            redo_stack: Vec::new(),
            pgn_headers: PgnHeaders::default(),
        }
    }

    /// Starts over from `fen`, or the standard position when `None`.
    /// A malformed FEN leaves the current game untouched.
    pub fn reset(&mut self, fen: Option<&str>) -> Result<(), FenError> {
        let initial_position = match fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::starting(),
        };
        self.initial_position = initial_position;
        self.state = GameState::new(initial_position);
        self.redo_stack.clear();
        info!(fen = %self.state.to_fen(), "game reset");
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn initial_position(&self) -> &Position {
        &self.initial_position
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.state.move_history
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Legal moves of the piece on `square`; empty for an empty square or a
    /// piece of the side not to move.
    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        self.state.legal_moves_from(square)
    }

    /// All legal moves for `color`, defaulting to the side to move.
    pub fn all_legal_moves(&self, color: Option<Color>) -> Vec<Move> {
        self.state.legal_moves(color.unwrap_or_else(|| self.turn()))
    }

    /// Plays `request` if it names a legal move of the side to move.
    pub fn make_move(&mut self, request: impl Into<MoveRequest>) -> bool {
        let request = request.into();
        let Some(mv) = self.state.find_legal_move(&request) else {
            debug!(%request, status = %self.state.status, "rejected move");
            return false;
        };

        self.redo_stack.clear();
        self.advance(mv);
        true
    }

    fn advance(&mut self, mv: Move) {
        self.state = self.state.play(mv);
        if self.state.status.is_terminal() {
            info!(status = %self.state.status, fen = %self.state.to_fen(), "game over");
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.state.status.is_forfeit() && !self.state.move_history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.state.status.is_forfeit() && !self.redo_stack.is_empty()
    }

    /// Takes back the last move by replaying everything before it.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }

        let history = &self.state.move_history;
        let (last, kept) = match history.split_last() {
            Some(split) => split,
            None => return false,
        };
        let Some(rebuilt) = replay(self.initial_position, kept) else {
            debug!("undo replay diverged; state kept");
            return false;
        };

        self.redo_stack.push(last.clone());
        self.state = rebuilt;
        true
    }

    /// Replays the most recently undone move.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let Some(request) = self.redo_stack.last().map(MoveRequest::from) else {
            return false;
        };
        let Some(mv) = self.state.find_legal_move(&request) else {
            debug!(%request, "redo move no longer legal");
            return false;
        };

        self.redo_stack.pop();
        self.advance(mv);
        true
    }

    /// The side to move resigns. No-op once the game is over.
    pub fn resign(&mut self) {
        if self.is_game_over() {
            return;
        }
        let loser = self.turn();
        self.state = self.state.with_status(GameStatus::Resigned(loser));
        info!(%loser, "resigned");
    }

    /// `color` ran out of time. No-op once the game is over.
    pub fn timeout(&mut self, color: Color) {
        if self.is_game_over() {
            return;
        }
        self.state = self.state.with_status(GameStatus::Timeout(color));
        info!(loser = %color, "flag fell");
    }

    pub fn to_fen(&self) -> String {
        self.state.to_fen()
    }

    pub fn pgn_headers(&self) -> &PgnHeaders {
        &self.pgn_headers
    }

    pub fn set_pgn_headers(&mut self, headers: PgnHeaders) {
        self.pgn_headers = headers;
    }

    pub fn to_pgn(&self) -> String {
        write_pgn(&self.initial_position, &self.state, &self.pgn_headers)
    }

    /// Replaces the game with the one in `pgn`, taking its Event, Site, Date,
    /// Round and player tags as the export headers. On any error the current
    /// game is kept exactly as it was.
    pub fn load_pgn(&mut self, pgn: &str) -> bool {
        match read_pgn(pgn) {
            Ok(game) => {
                info!(
                    plies = game.final_state.move_history.len(),
                    status = %game.final_state.status,
                    "PGN loaded"
                );
                self.pgn_headers = PgnHeaders::from_tags(&game.tags);
                self.initial_position = game.initial_position;
                self.state = game.final_state;
                self.redo_stack.clear();
                true
            }
            Err(err) => {
                debug!(error = %err, "PGN import rejected");
                false
            }
        }
    }

    /// Computer move for the current position. Does not play it.
    pub fn ai_move(&self, difficulty: Difficulty) -> Option<Move> {
        get_ai_move(&self.state, difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::ChessGame;
    use crate::engines::difficulty::Difficulty;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveRequest;

    fn req(lan: &str) -> MoveRequest {
        lan.parse().expect("LAN should parse")
    }

    fn play(game: &mut ChessGame, moves: &[&str]) {
        for lan in moves {
            assert!(game.make_move(req(lan)), "{lan} should be accepted");
        }
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = ChessGame::new();
        assert_eq!(game.all_legal_moves(None).len(), 20);
        assert_eq!(game.all_legal_moves(Some(Color::Black)).len(), 20);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn fools_mate_ends_in_checkmate_with_black_win() {
        let mut game = ChessGame::new();
        play(&mut game, &["f2f4", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert!(game.is_game_over());
        assert!(game.to_pgn().contains("[Result \"0-1\"]"));
        assert!(game.to_pgn().trim_end().ends_with("Qh4# 0-1"));
        assert!(!game.make_move(req("e1f2")));
    }

    #[test]
    fn illegal_move_is_rejected_without_side_effects() {
        let mut game = ChessGame::new();
        let before = game.state().clone();
        assert!(!game.make_move(req("e2e5")));
        assert!(!game.make_move(req("e7e5")));
        assert!(!game.make_move(req("d1d4")));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn legal_moves_empty_for_wrong_color_or_empty_square() {
        let game = ChessGame::new();
        let e7: Square = "e7".parse().expect("square");
        let e4: Square = "e4".parse().expect("square");
        let g1: Square = "g1".parse().expect("square");
        assert!(game.legal_moves(e7).is_empty());
        assert!(game.legal_moves(e4).is_empty());
        assert_eq!(game.legal_moves(g1).len(), 2);
    }

    #[test]
    fn en_passant_only_on_the_following_ply() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.state().position.en_passant, Some("d6".parse().expect("square")));

        let mut taken = game.clone();
        assert!(taken.make_move(req("e5d6")));
        assert_eq!(taken.board().get("d5".parse().expect("square")), None);

        // One tempo later the right has lapsed.
        play(&mut game, &["h2h3", "h7h6"]);
        assert_eq!(game.state().position.en_passant, None);
        assert!(!game.make_move(req("e5d6")));
    }

    #[test]
    fn castling_through_attacked_square_is_refused() {
        let mut game = ChessGame::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!game.make_move(req("e1g1")));
        assert!(game.make_move(req("e1c1")));
        assert_eq!(game.to_fen(), "4kr2/8/8/8/8/8/8/2KR3R b - - 1 1");
    }

    #[test]
    fn promotion_requires_a_choice() {
        let mut game = ChessGame::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!game.make_move(req("a7a8")));
        let a7: Square = "a7".parse().expect("square");
        assert_eq!(game.legal_moves(a7).len(), 4);
        assert!(game.make_move(req("a7a8q")));
        assert_eq!(game.move_history()[0].san.as_deref(), Some("a8=Q+"));
    }

    #[test]
    fn undo_then_redo_restores_identical_state() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
        let before = game.state().clone();

        assert!(game.undo());
        assert_ne!(game.state(), &before);
        assert!(game.can_redo());
        assert!(game.redo());
        assert_eq!(game.state(), &before);
        assert!(!game.can_redo());
    }

    #[test]
    fn undo_walks_back_to_a_custom_start() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let mut game = ChessGame::from_fen(fen).expect("FEN should parse");
        play(&mut game, &["e2e4", "e8d7"]);
        assert!(game.undo());
        assert!(game.undo());
        assert_eq!(game.to_fen(), fen);
        assert!(!game.undo());
        assert!(game.redo());
        assert!(game.redo());
        assert!(!game.redo());
        assert_eq!(game.move_history().len(), 2);
    }

    #[test]
    fn new_move_clears_redo_stack() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5"]);
        assert!(game.undo());
        assert!(game.undo());
        assert!(game.redo());
        assert!(game.can_redo());
        play(&mut game, &["c7c5"]);
        assert!(!game.can_redo());
        assert!(!game.redo());
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let mut game = ChessGame::new();
        assert!(!game.undo());
        assert!(!game.redo());
    }

    #[test]
    fn fifty_move_rule_triggers_at_one_hundred_halfmoves() {
        let mut game = ChessGame::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 98 80").expect("FEN should parse");
        play(&mut game, &["a1a2"]);
        assert_eq!(game.status(), GameStatus::Active);
        play(&mut game, &["e8d8"]);
        assert_eq!(game.state().position.halfmove_clock, 100);
        assert_eq!(game.status(), GameStatus::Draw50Move);
        assert!(game.to_pgn().contains("[Result \"1/2-1/2\"]"));
    }

    #[test]
    fn threefold_repetition_on_the_third_occurrence() {
        let mut game = ChessGame::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        play(&mut game, &shuffle);
        // Start position has now occurred twice.
        assert_eq!(game.status(), GameStatus::Active);

        play(&mut game, &shuffle[..3]);
        assert_eq!(game.status(), GameStatus::Active);
        play(&mut game, &shuffle[3..]);
        assert_eq!(game.status(), GameStatus::DrawRepetition);
        assert!(!game.make_move(req("e2e4")));
    }

    #[test]
    fn resign_and_timeout_freeze_the_game() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4"]);
        game.resign();
        assert_eq!(game.status(), GameStatus::Resigned(Color::Black));
        assert!(!game.make_move(req("e7e5")));
        assert!(!game.undo());
        assert!(game.to_pgn().contains("[Result \"*\"]"));

        let board_before = *game.board();
        game.timeout(Color::White);
        assert_eq!(game.status(), GameStatus::Resigned(Color::Black));
        assert_eq!(game.board(), &board_before);

        let mut game = ChessGame::new();
        game.timeout(Color::White);
        assert_eq!(game.status(), GameStatus::Timeout(Color::White));
        assert!(game.reset(None).is_ok());
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn reset_with_bad_fen_keeps_the_game() {
        let mut game = ChessGame::new();
        play(&mut game, &["d2d4"]);
        let before = game.state().clone();
        assert!(game.reset(Some("not a fen")).is_err());
        assert_eq!(game.state(), &before);

        assert!(game.reset(Some("4k3/8/8/8/8/8/8/4K2R w K - 0 1")).is_ok());
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn pgn_export_import_round_trip() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5c6", "d7c6", "e1g1"]);

        let pgn = game.to_pgn();
        let mut loaded = ChessGame::new();
        assert!(loaded.load_pgn(&pgn));
        assert_eq!(loaded.state(), game.state());
        assert_eq!(loaded.to_fen(), game.to_fen());
    }

    #[test]
    fn failed_pgn_import_leaves_state_unchanged() {
        let mut game = ChessGame::new();
        play(&mut game, &["d2d4", "d7d5"]);
        assert!(game.undo());
        let before = game.state().clone();

        assert!(!game.load_pgn("1. e4 e5 2. Nf3 Qxf2 3. Nc3"));
        assert_eq!(game.state(), &before);
        assert!(game.can_redo());
    }

    #[test]
    fn ai_move_does_not_mutate_the_game() {
        let mut game = ChessGame::new();
        let before = game.state().clone();
        let mv = game.ai_move(Difficulty::Medium).expect("start position has moves");
        assert_eq!(game.state(), &before);
        assert!(game.make_move(&mv));
    }

    #[test]
    fn load_pgn_accepts_inline_tags_and_line_comments() {
        let mut game = ChessGame::new();
        assert!(game.load_pgn("[Event \"x\"] 1. e4 e5 *"));
        assert_eq!(game.move_history().len(), 2);

        assert!(game.load_pgn("1. e4 ; comment here\n e5 *"));
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn load_pgn_keeps_imported_headers_on_export() {
        let mut game = ChessGame::new();
        let pgn = "[Event \"Club Night\"]\n[Site \"Leeds\"]\n[Date \"2024.03.09\"]\n\
                   [Round \"4\"]\n[White \"Ann\"]\n[Black \"Bo\"]\n[Result \"*\"]\n\n1. d4 d5 *";
        assert!(game.load_pgn(pgn));

        let exported = game.to_pgn();
        for tag in [
            "[Event \"Club Night\"]",
            "[Site \"Leeds\"]",
            "[Date \"2024.03.09\"]",
            "[Round \"4\"]",
            "[White \"Ann\"]",
            "[Black \"Bo\"]",
        ] {
            assert!(exported.contains(tag), "{tag} missing from export");
        }
        assert!(exported.trim_end().ends_with("1. d4 d5 *"));
    }
}
