use crate::{board::BoardState, piece::Piece, types::*};

pub const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate the pseudo-legal destinations of `piece`, returning a freshly allocated vector.
pub fn valid_moves(board: &BoardState, piece: &Piece) -> Vec<Coord> {
    let mut out = Vec::with_capacity(28);
    valid_moves_into(board, piece, &mut out);
    out
}

/// Generate the pseudo-legal destinations of `piece` into the provided buffer.
pub fn valid_moves_into(board: &BoardState, piece: &Piece, out: &mut Vec<Coord>) {
    out.clear();
    let from = piece.position();
    let c = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, c, out),
        PieceKind::Rook => gen_slider(board, from, c, out, &ROOK_DIRS),
        PieceKind::Knight => gen_leaper(board, from, c, out, &KNIGHT_JUMPS),
        PieceKind::Bishop => gen_slider(board, from, c, out, &BISHOP_DIRS),
        PieceKind::Queen => gen_slider(board, from, c, out, &QUEEN_DIRS),
        PieceKind::King => gen_leaper(board, from, c, out, &QUEEN_DIRS),
    }
}

/// Every `(from, to)` pair available to `color`, scanning the board row by row.
pub fn all_moves(board: &BoardState, color: Color) -> Vec<(Coord, Coord)> {
    let mut out = Vec::new();
    let mut buf = Vec::with_capacity(28);
    for piece in board.pieces().filter(|p| p.color() == color) {
        valid_moves_into(board, piece, &mut buf);
        out.extend(buf.iter().map(|&to| (piece.position(), to)));
    }
    out
}

fn gen_pawn(board: &BoardState, from: Coord, c: Color, out: &mut Vec<Coord>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row over an empty square
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);

            if from.row == c.pawn_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    // diagonal captures only, no en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Some(target) = board.piece_at(to) {
                if target.color() != c {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_slider(
    board: &BoardState,
    from: Coord,
    c: Color,
    out: &mut Vec<Coord>,
    dirs: &[(i8, i8)],
) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color() != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_leaper(
    board: &BoardState,
    from: Coord,
    c: Color,
    out: &mut Vec<Coord>,
    deltas: &[(i8, i8)],
) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color() != c => out.push(to),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
