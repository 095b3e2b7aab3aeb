//! Position-to-FEN encoder.
//!
//! Encoding is total: every structurally valid position renders to a FEN
//! string, and any string this module produces decodes back byte-for-byte
//! through the parser.

use crate::position::chess_types::{Color, File, Piece, PieceKind, Rank, Square};
use crate::position::castling_rights::Wing;
use crate::position::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position);
    let en_passant = match position.en_passant_target() {
        Some(square) => square.to_string(),
        None => "-".to_owned(),
    };

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    // Rank 8 renders first; empty runs collapse into a digit.
    for rank_index in (0..8u8).rev() {
        let rank = Rank::from_index(rank_index);
        let mut empty_run = 0u8;

        for file_index in 0..8u8 {
            let square = Square::new(File::from_index(file_index), rank);
            match position.board().get(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank_index > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(position: &Position) -> String {
    let rights = position.castling_rights();
    if rights.is_none() {
        return "-".to_owned();
    }

    let mut out = String::new();
    if rights.has(Color::White, Wing::Kingside) {
        out.push('K');
    }
    if rights.has(Color::White, Wing::Queenside) {
        out.push('Q');
    }
    if rights.has(Color::Black, Wing::Kingside) {
        out.push('k');
    }
    if rights.has(Color::Black, Wing::Queenside) {
        out.push('q');
    }
    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind() {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color() {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::fen::fen_parser::parse_fen;
    use crate::position::chess_rules::STARTING_POSITION_FEN;
    use crate::position::chess_types::Square;
    use crate::position::position::Position;
    use test_case::test_case;

    #[test]
    fn starting_position_encodes_to_the_canonical_string() {
        assert_eq!(generate_fen(&Position::new()), STARTING_POSITION_FEN);
    }

    #[test]
    fn en_passant_string_round_trips_byte_exactly() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position = parse_fen(fen).expect("en passant FEN should parse");

        assert_eq!(position.en_passant_target(), Some(Square::E3));
        assert_eq!(generate_fen(&position), fen);
    }

    #[test_case(STARTING_POSITION_FEN; "starting position")]
    #[test_case("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6"; "italian game")]
    #[test_case("8/8/8/8/8/8/8/8 w - - 0 1"; "empty board")]
    #[test_case("4k3/8/8/8/8/8/8/4K2R w K - 99 120"; "lone kingside right")]
    #[test_case("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"; "white to capture en passant")]
    #[test_case("r3k2r/8/8/8/8/8/8/R3K2R b Qk - 11 45"; "mixed castling subset")]
    fn decode_then_encode_is_identity(fen: &str) {
        let position = parse_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&position), fen);
    }
}
