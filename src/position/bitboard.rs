//! 64-bit square sets.
//!
//! A `Bitboard` holds one bit of membership information per square and is
//! the storage substrate for the board's piece planes.

use crate::position::chess_types::Square;

/// A set of squares, one bit per square (`bit 0 == a1`, `bit 63 == h8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// True if the bit at `square` is set.
    #[inline]
    pub const fn get(self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    /// Sets the bit at `square`.
    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    /// Clears the bit at `square`.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}
