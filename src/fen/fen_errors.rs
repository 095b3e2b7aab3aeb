//! Errors reported by the FEN boundary codec.
//!
//! Decoding is the sole locus of recoverable errors in the crate: every
//! failure names the offending field and text, and a failed decode never
//! yields a partial position. Encoding is total and has no error type.

/// A reason a FEN string failed to decode.
///
/// Each variant carries the offending text so callers can log or display a
/// precise diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The string did not split into exactly six space-separated fields.
    #[error("bad field count: {0}")]
    BadFieldCount(usize),

    /// The board field did not contain exactly eight ranks.
    #[error("bad rank count: {0}")]
    BadRankCount(usize),

    /// A rank did not sum to eight squares, or ran two digits together.
    #[error("bad rank: {0:?}")]
    BadRank(String),

    /// An unrecognized piece letter appeared in the board field.
    #[error("bad piece: {0:?}")]
    BadPiece(char),

    /// The side-to-move field was not `w` or `b`.
    #[error("bad side to move: {0:?}")]
    BadSideToMove(String),

    /// The castling field was not `-` or a subset of `KQkq` in that order.
    #[error("bad castling rights: {0:?}")]
    BadCastlingRights(String),

    /// The en passant field was not `-` or a parseable square.
    #[error("bad en passant target: {0:?}")]
    BadEnPassantTarget(String),

    /// The en passant square's rank does not agree with the side to move
    /// (rank 3 requires Black to move, rank 6 requires White).
    #[error("en passant target {0:?} contradicts the side to move")]
    EnPassantSideMismatch(String),

    /// The halfmove clock was not a non-negative integer without leading
    /// zeros.
    #[error("bad halfmove clock: {0:?}")]
    BadHalfmoveClock(String),

    /// The fullmove number was not a positive integer without leading
    /// zeros.
    #[error("bad fullmove number: {0:?}")]
    BadFullmoveNumber(String),
}
