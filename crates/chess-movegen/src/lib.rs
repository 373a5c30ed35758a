//! Bitboard-based legal chess move generation and perft drivers.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit board masks with shift, scan and byte-reverse
//!   operations
//! - [`Board`] - the packed 4-bitboard position encoding, always oriented so
//!   the side to move plays "north"
//! - [`generate_moves`] / [`count_moves`] - legal move generation (checks,
//!   pins, castling, en passant and promotions handled up front; no
//!   pseudo-legal filtering pass)
//! - [`make_move`] / [`make_pawn_push`] - move application with the
//!   post-move rotation that swaps the point of view to the next player
//! - [`perft`] / [`threaded_perft`] - leaf counting for move generator
//!   validation, sequential and with an OS-thread worker pool
//!
//! # Architecture
//!
//! A position is four 64-bit words: three "plane" bitboards whose bits at a
//! square spell the 3-bit piece code standing there, plus an occupancy mask
//! for the side to move that doubles as the en passant marker. After every
//! move the planes are byte-reversed so the next player again looks north;
//! no color field exists anywhere in the hot path.
//!
//! Sliding piece attacks come from a magic-indexed table built once at
//! startup; see [`movegen::tables`].

mod bitboard;
mod board;
pub mod movegen;

pub use bitboard::Bitboard;
pub use board::Board;
pub use movegen::perft::{perft, populate_position_pool, threaded_perft};
pub use movegen::tables::{tables, AttackTables};
pub use movegen::{count_moves, generate_moves, make_move, make_pawn_push, MoveList};
