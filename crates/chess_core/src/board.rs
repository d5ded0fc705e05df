use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ChessError;
use crate::piece::Piece;
use crate::types::*;

/// Placement string of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Occupancy of the 8x8 board plus the side to move.
///
/// Every stored piece's `position` equals the square it is stored on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
}

/// Serialized form of a board: the side to move and a flat piece list.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    turn: Color,
    pieces: Vec<Piece>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn: Color::White,
        }
    }

    /// A board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup();
        board
    }

    /// Reset to the 32-piece starting position with White to move.
    ///
    /// The board is cleared first, so calling this twice is harmless.
    pub fn setup(&mut self) {
        self.clear();
        for col in 0..BOARD_SIZE {
            for color in [Color::White, Color::Black] {
                self.put(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Coord::new(color.pawn_row(), col),
                ));
            }
        }
        for (col, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                self.put(Piece::new(
                    kind,
                    color,
                    Coord::new(color.back_row(), col as i8),
                ));
            }
        }
        self.turn = Color::White;
    }

    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// The piece on `at`, or `None` if the square is empty or off the board.
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        if !at.on_board() {
            return None;
        }
        self.squares[at.row as usize][at.col as usize].as_ref()
    }

    /// Relocate the piece on `start` to `end`, discarding anything on `end`.
    ///
    /// Returns `false` without touching the board if `start` is empty or either
    /// square is off the board. Nothing else is checked: whether `end` is one of
    /// the piece's valid moves, or whose turn it is, is up to the caller.
    pub fn move_piece(&mut self, start: Coord, end: Coord) -> bool {
        if !start.on_board() || !end.on_board() {
            trace!(%start, %end, "move rejected: off-board square");
            return false;
        }
        let Some(mut piece) = self.squares[start.row as usize][start.col as usize].take() else {
            trace!(%start, "move rejected: no piece on start square");
            return false;
        };

        piece.set_position(end);
        let captured = self.squares[end.row as usize][end.col as usize].replace(piece);

        match captured {
            Some(victim) => debug!(
                %start,
                %end,
                piece = %piece.symbol(),
                captured = %victim.symbol(),
                "piece moved with capture"
            ),
            None => debug!(%start, %end, piece = %piece.symbol(), "piece moved"),
        }
        true
    }

    /// Put a new piece on `at`, returning whatever was there before.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        at: Coord,
    ) -> Result<Option<Piece>, ChessError> {
        if !at.on_board() {
            return Err(ChessError::OffBoard(at));
        }
        Ok(self.put(Piece::new(kind, color, at)))
    }

    /// Take the piece off `at`.
    pub fn remove(&mut self, at: Coord) -> Option<Piece> {
        if !at.on_board() {
            return None;
        }
        self.squares[at.row as usize][at.col as usize].take()
    }

    // Caller guarantees the piece's position is on the board.
    fn put(&mut self, piece: Piece) -> Option<Piece> {
        let at = piece.position();
        self.squares[at.row as usize][at.col as usize].replace(piece)
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    /// Hand the move to the other side and return the new side to move.
    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.other();
        self.turn
    }

    /// Parse a placement string: the board field of FEN, row 0 first, with an
    /// optional side-to-move field. Further FEN fields are ignored.
    pub fn from_placement(text: &str) -> Result<Self, ChessError> {
        let mut fields = text.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| ChessError::InvalidPlacement("empty placement".to_string()))?;

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in row_str.chars() {
                if ('1'..='8').contains(&ch) {
                    col += (ch as u8 - b'0') as i8;
                } else {
                    let at = Coord::new(row as i8, col);
                    if !at.on_board() {
                        return Err(ChessError::InvalidPlacement(format!(
                            "too many squares in row {row}"
                        )));
                    }
                    let piece = Piece::from_symbol(ch, at).ok_or_else(|| {
                        ChessError::InvalidPlacement(format!("unknown piece letter `{ch}`"))
                    })?;
                    board.put(piece);
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err(ChessError::InvalidPlacement(format!(
                        "too many squares in row {row}"
                    )));
                }
            }
            if col != BOARD_SIZE {
                return Err(ChessError::InvalidPlacement(format!(
                    "row {row} covers {col} squares"
                )));
            }
        }

        board.turn = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(ChessError::InvalidPlacement(format!(
                    "invalid side to move `{other}`"
                )));
            }
        };
        Ok(board)
    }

    /// Write the board back in the form read by [`BoardState::from_placement`].
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, squares) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for square in squares {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out.push(' ');
        out.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out
    }

    /// Serialize to a JSON snapshot.
    pub fn to_json(&self) -> Result<String, ChessError> {
        let snapshot = Snapshot {
            turn: self.turn,
            pieces: self.pieces().copied().collect(),
        };
        serde_json::to_string_pretty(&snapshot).map_err(|e| ChessError::Snapshot(e.to_string()))
    }

    /// Load a JSON snapshot, rejecting off-board or doubly occupied squares.
    pub fn from_json(json: &str) -> Result<Self, ChessError> {
        let snapshot: Snapshot =
            serde_json::from_str(json).map_err(|e| ChessError::Snapshot(e.to_string()))?;

        let mut board = Self::empty();
        board.turn = snapshot.turn;
        for piece in snapshot.pieces {
            let at = piece.position();
            if !at.on_board() {
                return Err(ChessError::OffBoard(at));
            }
            if board.put(piece).is_some() {
                return Err(ChessError::DuplicateSquare(at));
            }
        }
        Ok(board)
    }

    /// Text diagram with rank and file labels. `flipped` puts Black at the bottom.
    pub fn diagram(&self, flipped: bool) -> String {
        self.diagram_with(flipped, |piece, _, out| {
            out.push(' ');
            out.push(piece.map_or('.', |p| p.symbol()));
        })
    }

    /// Lay out a labelled diagram, letting `cell` write each square.
    ///
    /// Every cell should be two characters wide so the file footer lines up.
    pub fn diagram_with(
        &self,
        flipped: bool,
        mut cell: impl FnMut(Option<&Piece>, Coord, &mut String),
    ) -> String {
        // rows and columns run in the same direction for either orientation
        let order: Vec<i8> = if flipped {
            (0..BOARD_SIZE).rev().collect()
        } else {
            (0..BOARD_SIZE).collect()
        };

        let mut out = String::new();
        for &row in &order {
            out.push((b'8' - row as u8) as char);
            for &col in &order {
                let at = Coord::new(row, col);
                cell(self.piece_at(at), at, &mut out);
            }
            out.push('\n');
        }
        out.push(' ');
        for &col in &order {
            out.push(' ');
            out.push((b'a' + col as u8) as char);
        }
        out.push('\n');
        out
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram(false))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
