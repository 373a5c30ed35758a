//! Core types for chess move generation.
//!
//! This crate provides the fundamental types shared across the workspace:
//! - [`Color`] for the two players
//! - [`Square`] for board coordinates
//! - [`PieceType`] - the 3-bit piece code, including the castleable rook
//! - [`Move`] - the packed 16-bit move representation
//! - [`Fen`] - FEN parsing and validation

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::Move;
pub use piece::PieceType;
pub use square::Square;
