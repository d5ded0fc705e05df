//! Text rendering of the board

use crate::game::Game;

/// Renders the board of a game as text.
///
/// Each square is two characters: a marker (`>` selected, `*` highlighted,
/// space otherwise) followed by the piece letter or `.`.
pub struct BoardView<'a> {
    game: &'a Game,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, flipped: bool) -> Self {
        Self { game, flipped }
    }

    pub fn render(&self) -> String {
        self.game
            .board()
            .diagram_with(self.flipped, |piece, at, out| {
                let marker = if self.game.selected() == Some(at) {
                    '>'
                } else if self.game.highlighted().contains(&at) {
                    '*'
                } else {
                    ' '
                };
                out.push(marker);
                out.push(piece.map_or('.', |p| p.symbol()));
            })
    }

    /// One-line summary of whose turn it is
    pub fn turn_label(&self) -> String {
        format!("Current Turn: {} ({})", self.game.turn(), self.game.status())
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
