//! Piece placement storage.
//!
//! A `Board` is twelve bitboard planes, one per colored piece kind, composed
//! into a single occupant-per-square view. Writes go through `set`/`clear`
//! so that a square is a member of at most one plane at any time.

use crate::position::bitboard::Bitboard;
use crate::position::chess_types::{Piece, Square};

/// Piece placements for a full board. The default value is an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    // One plane per colored piece kind, indexed by `Piece::index()`.
    planes: [Bitboard; 12],
}

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard starting arrangement.
    pub fn starting() -> Self {
        let mut board = Board::default();

        board.set(Piece::WHITE_ROOK, Square::A1);
        board.set(Piece::WHITE_KNIGHT, Square::B1);
        board.set(Piece::WHITE_BISHOP, Square::C1);
        board.set(Piece::WHITE_QUEEN, Square::D1);
        board.set(Piece::WHITE_KING, Square::E1);
        board.set(Piece::WHITE_BISHOP, Square::F1);
        board.set(Piece::WHITE_KNIGHT, Square::G1);
        board.set(Piece::WHITE_ROOK, Square::H1);
        for index in Square::A2.index()..=Square::H2.index() {
            let square = Square::from_index(index as u8).expect("second rank is in range");
            board.set(Piece::WHITE_PAWN, square);
        }

        for index in Square::A7.index()..=Square::H7.index() {
            let square = Square::from_index(index as u8).expect("seventh rank is in range");
            board.set(Piece::BLACK_PAWN, square);
        }
        board.set(Piece::BLACK_ROOK, Square::A8);
        board.set(Piece::BLACK_KNIGHT, Square::B8);
        board.set(Piece::BLACK_BISHOP, Square::C8);
        board.set(Piece::BLACK_QUEEN, Square::D8);
        board.set(Piece::BLACK_KING, Square::E8);
        board.set(Piece::BLACK_BISHOP, Square::F8);
        board.set(Piece::BLACK_KNIGHT, Square::G8);
        board.set(Piece::BLACK_ROOK, Square::H8);

        board
    }

    /// The piece on `square`, if any. Scans the twelve planes; by the
    /// single-occupant invariant at most one can match.
    pub fn get(&self, square: Square) -> Option<Piece> {
        for (index, plane) in self.planes.iter().enumerate() {
            if plane.get(square) {
                return Some(Piece::from_index(index as u8));
            }
        }
        None
    }

    /// True if `square` holds any piece.
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Places `piece` on `square`, removing any existing occupant first.
    pub fn set(&mut self, piece: Piece, square: Square) {
        self.clear(square);
        self.planes[piece.index()].set(square);
    }

    /// Removes any piece from `square`. Clearing an empty square is a no-op.
    pub fn clear(&mut self, square: Square) {
        for plane in &mut self.planes {
            plane.clear(square);
        }
    }

    /// The plane for one colored piece kind.
    pub fn plane(&self, piece: Piece) -> Bitboard {
        self.planes[piece.index()]
    }
}
