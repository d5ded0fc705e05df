//! Game state management: turn, selection and status

use chess_core::{BoardState, Color, Coord, GameStatus, Piece, StatusTracker};
use tracing::{debug, info};

use crate::config::{ConfigError, GameConfig};

/// What a click on the board did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected; `moves` are highlighted
    Selected { from: Coord, moves: Vec<Coord> },
    /// The selected piece moved, possibly capturing
    Moved {
        from: Coord,
        to: Coord,
        captured: Option<Piece>,
    },
    /// The selection was dropped without moving
    Deselected,
    /// Nothing selectable was clicked
    Ignored,
}

/// Represents the current state of a chess game
#[derive(Debug, Clone)]
pub struct Game {
    /// Board and side to move
    board: BoardState,
    /// Position the game started from, restored by `reset`
    start: BoardState,
    /// Currently selected square
    selected: Option<Coord>,
    /// Valid destinations of the selected piece
    highlighted: Vec<Coord>,
    status: StatusTracker,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(BoardState::new())
    }

    pub fn from_board(board: BoardState) -> Self {
        Self {
            start: board.clone(),
            board,
            selected: None,
            highlighted: Vec::new(),
            status: StatusTracker::new(),
        }
    }

    /// Start from the configured position
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_board(config.start_board()?))
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn highlighted(&self) -> &[Coord] {
        &self.highlighted
    }

    pub fn status(&self) -> GameStatus {
        self.status.status()
    }

    /// Back to the position the game started from
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.clear_selection();
        self.status = StatusTracker::new();
        info!("game reset");
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.highlighted.clear();
    }

    /// Handle a click on `at`.
    ///
    /// With a piece selected, clicking one of its highlighted squares moves it
    /// and passes the turn; any other click just drops the selection. Without a
    /// selection, clicking a piece of the side to move selects it.
    pub fn click(&mut self, at: Coord) -> ClickOutcome {
        if let Some(from) = self.selected {
            let outcome = if self.highlighted.contains(&at) {
                self.apply_move(from, at)
            } else {
                debug!(%from, %at, "selection dropped");
                ClickOutcome::Deselected
            };
            self.clear_selection();
            return outcome;
        }

        self.highlighted.clear();
        match self.board.piece_at(at) {
            Some(piece) if piece.color() == self.board.turn() => {
                let moves = piece.valid_moves(&self.board);
                debug!(%at, count = moves.len(), "piece selected");
                self.selected = Some(at);
                self.highlighted = moves.clone();
                ClickOutcome::Selected { from: at, moves }
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn apply_move(&mut self, from: Coord, to: Coord) -> ClickOutcome {
        let captured = self.board.piece_at(to).copied();
        if !self.board.move_piece(from, to) {
            return ClickOutcome::Deselected;
        }

        let mover = self.board.turn();
        let next = self.board.toggle_turn();
        let status = self.status.update(&self.board, next);
        info!(%mover, %from, %to, %status, "move played");

        ClickOutcome::Moved { from, to, captured }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
