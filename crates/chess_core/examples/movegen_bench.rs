//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs `all_moves` for both sides over a handful of positions.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p chess_core

use chess_core::{BoardState, Color, all_moves};
use std::time::{Duration, Instant};

/// Positions covering different game phases
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"),
    ("e4", "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"),
    (
        "Sicilian",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b",
    ),
    (
        "Open middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
    ("Lone queens", "3q4/8/8/3k4/8/3K4/8/3Q4 w"),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    let mut total_time = Duration::ZERO;

    for (name, placement) in TEST_POSITIONS {
        let board = match BoardState::from_placement(placement) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Skipping {name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;
        for _ in 0..ITERATIONS {
            moves_generated += all_moves(&board, Color::White).len();
            moves_generated += all_moves(&board, Color::Black).len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_moves} moves in {total_time:.3?}");
}
