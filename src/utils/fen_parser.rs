//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string:
//! placement, side to move, castling rights, en-passant target and clocks.

use crate::chess_errors::FenError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(FenError::FieldCount(parts.len()));
    }

    let mut position = Position::default();

    parse_board(parts[0], &mut position.board)?;
    position.turn = parse_side_to_move(parts[1])?;
    position.castling_rights = parse_castling_rights(parts[2])?;
    position.en_passant = parse_en_passant_square(parts[3])?;
    position.halfmove_clock = parse_counter("halfmove", parts[4])?;
    position.fullmove_number = parse_counter("fullmove", parts[5])?;

    for color in [Color::White, Color::Black] {
        if position.board.count(Piece::new(color, PieceKind::King)) != 1 {
            return Err(FenError::KingCount(color));
        }
    }

    Ok(position)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(FenError::RankWidth { rank: 8 - row });
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if col >= 8 {
                return Err(FenError::RankWidth { rank: 8 - row });
            }

            board.set(Square::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(FenError::RankWidth { rank: 8 - row });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidTurn(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastlingSide::Kingside),
            'Q' => (Color::White, CastlingSide::Queenside),
            'k' => (Color::Black, CastlingSide::Kingside),
            'q' => (Color::Black, CastlingSide::Queenside),
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        };
        if rights.has(color, side) {
            return Err(FenError::InvalidCastling(castling_part.to_owned()));
        }
        rights.grant(color, side);
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;

    // Only ranks 3 and 6 can hold a passed-over square.
    if square.row != 2 && square.row != 5 {
        return Err(FenError::InvalidEnPassant(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

/// Plain decimal digits without a sign or leading zeros, so the field
/// writes back unchanged.
fn parse_counter(field: &'static str, value: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        field,
        value: value.to_owned(),
    };

    let canonical = !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && (value == "0" || !value.starts_with('0'));
    if !canonical {
        return Err(invalid());
    }
    value.parse::<u32>().map_err(|_| invalid())
}
