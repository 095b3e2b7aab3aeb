//! Castling rights bookkeeping.
//!
//! Four independent flags packed into one byte. A right is present while
//! the involved king and rook are unmoved and the rook uncaptured; the
//! position mutator revokes flags and never re-grants them mid-game.

use crate::position::chess_types::Color;

/// Which side of the board a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    Kingside,
    Queenside,
}

/// Castling rights for both players, bit-packed:
/// bit 0 white kingside, bit 1 white queenside,
/// bit 2 black kingside, bit 3 black queenside.
///
/// The right to castle is distinct from the ability to castle: White holds
/// both rights at move one even though castling is not yet a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No rights for either player.
    pub const NONE: CastlingRights = CastlingRights(0);

    /// All four rights, as at the start of a game.
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn mask(color: Color, wing: Wing) -> u8 {
        let wing_bit = match wing {
            Wing::Kingside => 0,
            Wing::Queenside => 1,
        };
        1u8 << (color.index() * 2 + wing_bit)
    }

    /// True if `color` still holds the right to castle on `wing`.
    #[inline]
    pub const fn has(self, color: Color, wing: Wing) -> bool {
        self.0 & Self::mask(color, wing) != 0
    }

    /// Grants one right. Used only when constructing a position.
    #[inline]
    pub fn grant(&mut self, color: Color, wing: Wing) {
        self.0 |= Self::mask(color, wing);
    }

    /// Revokes one right.
    #[inline]
    pub fn revoke(&mut self, color: Color, wing: Wing) {
        self.0 &= !Self::mask(color, wing);
    }

    /// Revokes both of `color`'s rights.
    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, Wing::Kingside);
        self.revoke(color, Wing::Queenside);
    }

    /// True if no right remains for either player.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}
