//! FEN (Forsyth-Edwards Notation) parsing.

use crate::{Color, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected at least 4 fields, got {0}")]
    TooFewFields(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights: unexpected character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassant(String),
}

/// A validated FEN record.
///
/// Holds the parsed fields of a FEN string. The board representation is
/// responsible for turning this into its internal bitboard encoding; this
/// type only guarantees that the text is well-formed.
///
/// The half-move clock and full-move number are optional in the accepted
/// grammar (many published test positions omit them) and are not used by
/// move generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Piece placement field, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".
    pub placement: String,
    /// Which player moves next.
    pub side_to_move: Color,
    /// Castling availability, e.g. "KQkq" or "-".
    pub castling: String,
    /// En passant target square, if any.
    pub en_passant: Option<Square>,
    /// Half-move clock for the fifty-move rule; 0 when absent.
    pub halfmove_clock: u32,
    /// Full-move number; 1 when absent.
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// The first four fields (placement, side to move, castling, en passant)
    /// are required; the clock fields are accepted but optional.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(FenError::TooFewFields(fields.len()));
        }

        let placement = fields[0];
        Self::validate_placement(placement)?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let castling = fields[2];
        Self::validate_castling(castling)?;

        let en_passant = match fields[3] {
            "-" => None,
            s => Some(
                Square::from_algebraic(s).ok_or_else(|| FenError::InvalidEnPassant(s.to_string()))?,
            ),
        };

        // The clocks are irrelevant to move generation; take them when they
        // parse and fall back to defaults otherwise.
        let halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(Fen {
            placement: placement.to_string(),
            side_to_move,
            castling: castling.to_string(),
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn validate_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(FenError::InvalidPlacement(format!(
                            "invalid empty-square run '{}' in rank {}",
                            c,
                            8 - i
                        )));
                    }
                    squares += run;
                } else if "pnbrqkPNBRQK".contains(c) {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        // Duplicated or out-of-order letters are tolerated; anything outside
        // the KQkq alphabet is not.
        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastling(c));
            }
        }

        Ok(())
    }
}
