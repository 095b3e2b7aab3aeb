//! Crate root module declarations for the Quartz Chess position library.
//!
//! This file exposes the position model (coordinate primitives, bitboards,
//! board, castling rights, packed moves, and the position state transition)
//! and the FEN boundary codec so tests, benches, and external tooling can
//! import stable module paths.

pub mod position {
    pub mod bitboard;
    pub mod board;
    pub mod castling_rights;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod fen {
    pub mod fen_errors;
    pub mod fen_generator;
    pub mod fen_parser;
}

pub mod utils {
    pub mod render_position;
}
