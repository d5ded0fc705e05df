use thiserror::Error;

use crate::types::Coord;

/// Errors raised while building or parsing board positions.
///
/// Move application itself never errors; see [`crate::BoardState::move_piece`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
    #[error("square {0} is off the board")]
    OffBoard(Coord),
    #[error("more than one piece on {0}")]
    DuplicateSquare(Coord),
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}
