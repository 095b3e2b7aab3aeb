//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a position's board for debugging and
//! test output in text environments.

use crate::position::chess_types::{Color, File, PieceKind, Rank, Square};
use crate::position::position::Position;

/// Render the board to a Unicode string for terminal output.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank_index in (0..8u8).rev() {
        out.push(char::from(b'1' + rank_index));
        out.push(' ');

        for file_index in 0..8u8 {
            let square = Square::new(File::from_index(file_index), Rank::from_index(rank_index));
            match position.board().get(square) {
                Some(piece) => out.push(piece_to_unicode(piece.color(), piece.kind())),
                None => out.push('·'),
            }
            if file_index < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank_index));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::position::position::Position;

    #[test]
    fn starting_position_renders_all_ranks() {
        let rendered = render_position(&Position::new());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert!(lines[1].starts_with("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        assert!(lines[8].starts_with("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖"));
    }
}
