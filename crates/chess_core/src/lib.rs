//! Board state and pseudo-legal move generation for a two-player chess game.
//!
//! [`BoardState`] owns every [`Piece`]; [`Piece::valid_moves`] derives the
//! squares a piece may move to from the current occupancy. Moves that leave the
//! mover's king in check are not filtered out, and there is no castling,
//! en-passant or promotion.

pub mod board;
pub mod error;
pub mod movegen;
pub mod piece;
pub mod status;
pub mod types;

pub use board::*;
pub use error::ChessError;
pub use movegen::{all_moves, valid_moves, valid_moves_into};
pub use piece::Piece;
pub use status::*;
pub use types::*;
