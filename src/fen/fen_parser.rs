//! FEN-to-position decoder.
//!
//! Builds a fully-populated `Position` from a Forsyth-Edwards Notation
//! string, one field at a time, rejecting malformed input with a
//! field-specific [`FenError`] and never yielding a partial position.

use crate::fen::fen_errors::FenError;
use crate::position::board::Board;
use crate::position::castling_rights::{CastlingRights, Wing};
use crate::position::chess_types::{Color, Piece, PieceKind, Rank, Square};
use crate::position::position::{Position, PositionConfig};

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split(' ').collect();
    if fields.len() != 6 {
        return Err(FenError::BadFieldCount(fields.len()));
    }

    let board = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant_target = parse_en_passant_target(fields[3], side_to_move)?;
    let halfmove_clock = parse_halfmove_clock(fields[4])?;
    let fullmove_number = parse_fullmove_number(fields[5])?;

    Ok(Position::from_config(PositionConfig {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    }))
}

fn parse_board(board_field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first.
    for (row, rank_text) in ranks.iter().enumerate() {
        let rank = Rank::from_index(7 - row as u8);
        let mut file = 0u8;
        let mut previous_was_digit = false;

        for ch in rank_text.chars() {
            if let Some(run) = ch.to_digit(10) {
                // Two digits in a row would make the rank ambiguous.
                if previous_was_digit || !(1..=8).contains(&run) {
                    return Err(FenError::BadRank((*rank_text).to_owned()));
                }
                file += run as u8;
                previous_was_digit = true;
                continue;
            }
            previous_was_digit = false;

            let piece = piece_from_fen_char(ch).ok_or(FenError::BadPiece(ch))?;
            if file >= 8 {
                return Err(FenError::BadRank((*rank_text).to_owned()));
            }

            let square = Square::from_index(rank.index() as u8 * 8 + file)
                .expect("file and rank are both below eight");
            board.set(piece, square);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRank((*rank_text).to_owned()));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_field: &str) -> Result<Color, FenError> {
    match side_field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::BadSideToMove(side_field.to_owned())),
    }
}

fn parse_castling_rights(castling_field: &str) -> Result<CastlingRights, FenError> {
    if castling_field == "-" {
        return Ok(CastlingRights::NONE);
    }
    if castling_field.is_empty() {
        return Err(FenError::BadCastlingRights(castling_field.to_owned()));
    }

    // Any subset of the letters, in this fixed order, no repeats.
    const LETTERS: [(char, Color, Wing); 4] = [
        ('K', Color::White, Wing::Kingside),
        ('Q', Color::White, Wing::Queenside),
        ('k', Color::Black, Wing::Kingside),
        ('q', Color::Black, Wing::Queenside),
    ];

    let mut rights = CastlingRights::NONE;
    let mut next = 0usize;

    for ch in castling_field.chars() {
        let found = LETTERS[next..]
            .iter()
            .position(|&(letter, _, _)| letter == ch)
            .ok_or_else(|| FenError::BadCastlingRights(castling_field.to_owned()))?;
        let (_, color, wing) = LETTERS[next + found];
        rights.grant(color, wing);
        next += found + 1;
    }

    Ok(rights)
}

fn parse_en_passant_target(
    en_passant_field: &str,
    side_to_move: Color,
) -> Result<Option<Square>, FenError> {
    if en_passant_field == "-" {
        return Ok(None);
    }

    let square: Square = en_passant_field
        .parse()
        .map_err(|_| FenError::BadEnPassantTarget(en_passant_field.to_owned()))?;

    // A target on rank 3 was left by White's double push, so Black must be
    // on the move, and symmetrically for rank 6.
    match (square.rank(), side_to_move) {
        (Rank::R3, Color::Black) | (Rank::R6, Color::White) => Ok(Some(square)),
        (Rank::R3, Color::White) | (Rank::R6, Color::Black) => {
            Err(FenError::EnPassantSideMismatch(en_passant_field.to_owned()))
        }
        _ => Err(FenError::BadEnPassantTarget(en_passant_field.to_owned())),
    }
}

fn parse_halfmove_clock(halfmove_field: &str) -> Result<u16, FenError> {
    if !is_unsigned_decimal(halfmove_field, true) {
        return Err(FenError::BadHalfmoveClock(halfmove_field.to_owned()));
    }
    halfmove_field
        .parse::<u16>()
        .map_err(|_| FenError::BadHalfmoveClock(halfmove_field.to_owned()))
}

fn parse_fullmove_number(fullmove_field: &str) -> Result<u16, FenError> {
    if !is_unsigned_decimal(fullmove_field, false) {
        return Err(FenError::BadFullmoveNumber(fullmove_field.to_owned()));
    }
    fullmove_field
        .parse::<u16>()
        .map_err(|_| FenError::BadFullmoveNumber(fullmove_field.to_owned()))
}

/// Matches `0|[1-9][0-9]*` (or `[1-9][0-9]*` when zero is not allowed).
fn is_unsigned_decimal(text: &str, allow_zero: bool) -> bool {
    let bytes = text.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => allow_zero,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(color, kind))
}
