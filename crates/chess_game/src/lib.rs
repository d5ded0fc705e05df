//! Two-player chess front end.
//!
//! [`Game`] tracks whose turn it is and which piece is selected, and turns
//! square clicks into calls on the `chess_core` engine. [`BoardView`] draws the
//! result as text.

mod config;
mod game;
mod view;

pub use config::*;
pub use game::*;
pub use view::*;
