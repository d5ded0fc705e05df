use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::movegen;
use crate::types::{Color, Coord, PieceKind};

/// A piece on the board. Kind and color are fixed at creation; only the
/// position changes, and only through [`BoardState::move_piece`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Coord,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Coord) -> Self {
        Self {
            kind,
            color,
            position,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub(crate) fn set_position(&mut self, to: Coord) {
        self.position = to;
    }

    /// Pseudo-legal destination squares for this piece on `board`.
    ///
    /// Squares are in direction order then distance; callers should treat the
    /// result as a set. Moves that leave the own king in check are included.
    pub fn valid_moves(&self, board: &BoardState) -> Vec<Coord> {
        movegen::valid_moves(board, self)
    }

    /// Notation letter, uppercase for White and lowercase for Black.
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    pub fn from_symbol(c: char, position: Coord) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, position))
    }
}
