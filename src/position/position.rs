//! Full game-position state and the move-application transition.
//!
//! `Position` composes the board, side to move, castling rights, en passant
//! target, and move counters, and owns the single state-transition function
//! `apply_unchecked` that resolves every special case (en passant capture,
//! castling rook co-movement, promotion, castling-right forfeiture) in one
//! atomic update. Legality checking is an external concern: the mutator
//! trusts its input and always produces a structurally valid position.

use crate::position::board::Board;
use crate::position::castling_rights::{CastlingRights, Wing};
use crate::position::chess_move::Move;
use crate::position::chess_types::{Color, Piece, PieceKind, Rank, Square};

/// Construction parameters for a position. Every field defaults to its
/// standard starting-position value, so callers override only what differs.
#[derive(Debug, Clone, Copy)]
pub struct PositionConfig {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for PositionConfig {
    fn default() -> Self {
        PositionConfig {
            board: Board::starting(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// A game position at one point in time.
///
/// Positions have value semantics: callers that need history must copy
/// before mutating, and no sharing exists between copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Position::from_config(PositionConfig::default())
    }

    /// Builds a position from explicit configuration.
    pub fn from_config(config: PositionConfig) -> Self {
        Position {
            board: config.board,
            side_to_move: config.side_to_move,
            castling_rights: config.castling_rights,
            en_passant_target: config.en_passant_target,
            halfmove_clock: config.halfmove_clock,
            fullmove_number: config.fullmove_number,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Applies `mv` without checking legality.
    ///
    /// The move's source square must hold a piece of the side to move; for
    /// a castling move, pass the king's source and destination squares. An
    /// illegal-but-well-formed move yields a structurally valid (if
    /// chess-illegal) position.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty. That is a caller contract
    /// violation, not a recoverable condition.
    pub fn apply_unchecked(&mut self, mv: Move) {
        let (from, to) = (mv.from(), mv.to());

        // The moved piece, or when castling, the king.
        let mut held = match self.board.get(from) {
            Some(piece) => piece,
            None => panic!("apply_unchecked: no piece on source square {from}"),
        };

        let is_pawn_move = matches!(held.kind(), PieceKind::Pawn);

        // A pawn changing file onto an empty square is the en passant
        // capture; every other capture lands on an occupied square.
        let is_capture =
            self.board.is_occupied(to) || (is_pawn_move && from.file() != to.file());

        // If capturing en passant, remove the pawn behind the target.
        if let Some(target) = self.en_passant_target {
            if is_pawn_move && is_capture && to == target {
                match self.side_to_move {
                    Color::White => self.board.clear(target.below()), // a black pawn
                    Color::Black => self.board.clear(target.above()), // a white pawn
                }
            }
        }

        // Refresh the en passant target. A double push records the skipped
        // square; any other move clears it, so a target never survives more
        // than one transition.
        self.en_passant_target = if is_pawn_move {
            match (from.rank(), to.rank()) {
                (Rank::R2, Rank::R4) => Some(to.below()), // white double push
                (Rank::R7, Rank::R5) => Some(to.above()), // black double push
                _ => None,
            }
        } else {
            None
        };

        // Moving a king forfeits both of its owner's castling rights.
        if matches!(held.kind(), PieceKind::King) {
            self.castling_rights.revoke_all(held.color());
        }

        // Touching a rook's home corner, by moving from it or capturing on
        // it, forfeits the right tied to that corner.
        for (corner, color, wing) in [
            (Square::A1, Color::White, Wing::Queenside),
            (Square::H1, Color::White, Wing::Kingside),
            (Square::A8, Color::Black, Wing::Queenside),
            (Square::H8, Color::Black, Wing::Kingside),
        ] {
            if from == corner || to == corner {
                self.castling_rights.revoke(color, wing);
            }
        }

        // A promotion places the chosen piece instead of the pawn.
        if let Some(kind) = mv.promotion() {
            held = Piece::new(self.side_to_move, kind);
        }

        // Move the held piece. When castling, this relocates the king.
        self.board.clear(from);
        self.board.set(held, to);

        // When the king travel matches a castling geometry, carry the rook
        // from its corner to the crossing square.
        if matches!(held.kind(), PieceKind::King) {
            let rook_shift = match (from, to) {
                (Square::E1, Square::G1) => Some((Square::H1, Square::F1, Piece::WHITE_ROOK)),
                (Square::E1, Square::C1) => Some((Square::A1, Square::D1, Piece::WHITE_ROOK)),
                (Square::E8, Square::G8) => Some((Square::H8, Square::F8, Piece::BLACK_ROOK)),
                (Square::E8, Square::C8) => Some((Square::A8, Square::D8, Piece::BLACK_ROOK)),
                _ => None,
            };
            if let Some((corner, crossing, rook)) = rook_shift {
                self.board.clear(corner);
                self.board.set(rook, crossing);
            }
        }

        // Halfmove clock: pawn moves and captures reset it.
        if is_pawn_move || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        // The fullmove number advances once Black has completed a move.
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = self.side_to_move.opposite();
    }
}
