//! Bit-packed move description.
//!
//! A `Move` records only the source square, destination square, and an
//! optional promotion kind. It carries no validity judgement; legality is
//! an external concern.

use crate::position::chess_types::{PieceKind, Square};

/// A move, packed into sixteen bits:
/// bits 0-5 destination square, bits 6-11 source square,
/// bits 12-15 promotion kind index, or 0 when not promoting.
///
/// For a castling move the recorded squares are the king's own source and
/// destination (e.g. e1 to g1); the rook relocation is derived by the
/// position mutator, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// A plain move. For castling, pass the king's squares.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) << 6 | to.index() as u16)
    }

    /// A promotion move. `become` must not be `Pawn` or `King`.
    #[inline]
    pub const fn new_promotion(from: Square, to: Square, r#become: PieceKind) -> Self {
        Move((r#become.index() as u16) << 12 | (from.index() as u16) << 6 | to.index() as u16)
    }

    /// The source square (the king's, for castling).
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 >> 6 & 0b11_1111) as u8) {
            Some(square) => square,
            None => unreachable!(),
        }
    }

    /// The destination square (the king's, for castling).
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index((self.0 & 0b11_1111) as u8) {
            Some(square) => square,
            None => unreachable!(),
        }
    }

    /// The kind promoted to, if this is a promotion move.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.0 >> 12 {
            0 => None,
            code => Some(PieceKind::from_index(code as u8)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_plain_move() {
        let mv = Move::new(Square::E3, Square::G8);
        assert_eq!(mv.from(), Square::E3);
        assert_eq!(mv.to(), Square::G8);
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn packs_and_unpacks_promotion() {
        let from: Square = "e7".parse().expect("e7 should parse");
        let to: Square = "e8".parse().expect("e8 should parse");

        for kind in [
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ] {
            let mv = Move::new_promotion(from, to, kind);
            assert_eq!(mv.from(), from);
            assert_eq!(mv.to(), to);
            assert_eq!(mv.promotion(), Some(kind));
        }
    }

    #[test]
    fn distinct_moves_pack_distinctly() {
        // Field packing must not collapse different moves to one value.
        let a = Move::new(Square::E1, Square::G1);
        let b = Move::new(Square::E1, Square::C1);
        let c = Move::new(Square::G1, Square::E1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn extreme_squares_survive_packing() {
        let mv = Move::new(Square::H8, Square::A1);
        assert_eq!(mv.from(), Square::H8);
        assert_eq!(mv.to(), Square::A1);
    }
}
