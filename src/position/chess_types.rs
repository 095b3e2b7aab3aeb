//! Coordinate primitives for the position model.
//!
//! Defines the closed enumerations (`Color`, `PieceKind`, `File`, `Rank`)
//! and the packed `Piece` and `Square` values they compose into, together
//! with the square arithmetic and algebraic text conversions reused by the
//! board, the move mutator, and the FEN codec.

use std::fmt;
use std::str::FromStr;

/// Side to move, or the owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// The opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds, in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        match index {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }
}

/// A colored piece, packed into one byte.
///
/// White pieces occupy indices 0-5 and black pieces 6-11, in `PieceKind`
/// order, so the index doubles as a bitboard-plane selector on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece((color.index() * 6 + kind.index()) as u8)
    }

    /// Reconstructs a piece from its plane index (`0..=11`).
    pub(crate) const fn from_index(index: u8) -> Self {
        Piece(index % 12)
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.0 >= 6 {
            Color::Black
        } else {
            Color::White
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_index(self.0 % 6)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A column of the board, `a` through `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        match index {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            _ => File::H,
        }
    }
}

/// A row of the board. `Rank::R1` has index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Rank {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        match index {
            0 => Rank::R1,
            1 => Rank::R2,
            2 => Rank::R3,
            3 => Rank::R4,
            4 => Rank::R5,
            5 => Rank::R6,
            6 => Rank::R7,
            _ => Rank::R8,
        }
    }
}

/// A board square, packed as `rank * 8 + file` (`0 == a1`, `63 == h8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const E3: Square = Square(20);
    pub const A7: Square = Square(48);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square((rank.index() * 8 + file.index()) as u8)
    }

    /// Creates a square from its packed index, if it is in `0..=63`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        File::from_index(self.0 % 8)
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 / 8)
    }

    /// The square one rank up. Must not be called on the eighth rank.
    #[inline]
    pub fn above(self) -> Square {
        debug_assert!(self.0 < 56, "no square above the eighth rank");
        Square(self.0 + 8)
    }

    /// The square one rank down. Must not be called on the first rank.
    #[inline]
    pub fn below(self) -> Square {
        debug_assert!(self.0 >= 8, "no square below the first rank");
        Square(self.0 - 8)
    }
}

/// Display a square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.0 % 8);
        let rank = char::from(b'1' + self.0 / 8);
        write!(f, "{file}{rank}")
    }
}

/// Error type for parsing algebraic square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    #[error("file must be a-h")]
    BadFile,
    #[error("rank must be 1-8")]
    BadRank,
}

/// Parse algebraic notation like "e4" into a square.
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareParseError::WrongLength);
        }
        if !(b'a'..=b'h').contains(&bytes[0]) {
            return Err(SquareParseError::BadFile);
        }
        if !(b'1'..=b'8').contains(&bytes[1]) {
            return Err(SquareParseError::BadRank);
        }
        Ok(Square((bytes[1] - b'1') * 8 + (bytes[0] - b'a')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_opposite_flips() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn piece_projections_recover_parts() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
            }
        }
    }

    #[test]
    fn piece_plane_indices_are_dense() {
        assert_eq!(Piece::WHITE_PAWN.index(), 0);
        assert_eq!(Piece::WHITE_KING.index(), 5);
        assert_eq!(Piece::BLACK_PAWN.index(), 6);
        assert_eq!(Piece::BLACK_KING.index(), 11);
    }

    #[test]
    fn square_packing_matches_rank_times_eight_plus_file() {
        assert_eq!(Square::new(File::A, Rank::R1), Square::A1);
        assert_eq!(Square::new(File::H, Rank::R8), Square::H8);
        assert_eq!(Square::new(File::E, Rank::R3).index(), 20);
        assert_eq!(Square::E3.file(), File::E);
        assert_eq!(Square::E3.rank(), Rank::R3);
    }

    #[test]
    fn square_from_index_range_checks() {
        assert_eq!(Square::from_index(0), Some(Square::A1));
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn square_vertical_neighbors() {
        assert_eq!(Square::E3.above().to_string(), "e4");
        assert_eq!(Square::E3.below().to_string(), "e2");
        assert_eq!(Square::A2.below(), Square::A1);
        assert_eq!(Square::A7.above(), Square::A8);
    }

    #[test]
    fn square_algebraic_round_trip() {
        for index in 0..64u8 {
            let square = Square::from_index(index).expect("index should be in range");
            let text = square.to_string();
            let parsed: Square = text.parse().expect("rendered square should parse");
            assert_eq!(parsed, square);
        }
    }

    #[test]
    fn square_parse_rejects_malformed_text() {
        assert_eq!("".parse::<Square>(), Err(SquareParseError::WrongLength));
        assert_eq!("e".parse::<Square>(), Err(SquareParseError::WrongLength));
        assert_eq!("e44".parse::<Square>(), Err(SquareParseError::WrongLength));
        assert_eq!("i4".parse::<Square>(), Err(SquareParseError::BadFile));
        assert_eq!("e9".parse::<Square>(), Err(SquareParseError::BadRank));
        assert_eq!("e0".parse::<Square>(), Err(SquareParseError::BadRank));
    }
}
