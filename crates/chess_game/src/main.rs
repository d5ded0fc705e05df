//! Terminal chess for two players
//!
//! Usage: chess_game [settings.toml]

use anyhow::Context;
use chess_core::{all_moves, Coord};
use chess_game::{BoardView, ClickOutcome, Game, GameConfig};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Commands:");
    println!("  <square>   select a piece or a highlighted square (e2 or 6,4)");
    println!("  moves      list every move for the side to move");
    println!("  board      redraw the board");
    println!("  reset      start over");
    println!("  help       show this text");
    println!("  quit       leave");
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn show(game: &Game, config: &GameConfig) {
    let view = BoardView::new(game, config.flip_board);
    println!("{}", view.render());
    println!("{}", view.turn_label());
}

fn format_squares(squares: &[Coord]) -> String {
    squares
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn handle_click(game: &mut Game, config: &GameConfig, at: Coord) {
    match game.click(at) {
        ClickOutcome::Selected { from, moves } => {
            if config.show_hints {
                if moves.is_empty() {
                    println!("{from} has no moves");
                } else {
                    println!("{from} can go to: {}", format_squares(&moves));
                }
            }
            show(game, config);
        }
        ClickOutcome::Moved { from, to, captured } => {
            match captured {
                Some(victim) => println!("{from} takes {} on {to}", victim.symbol()),
                None => println!("{from} to {to}"),
            }
            show(game, config);
        }
        ClickOutcome::Deselected => {
            println!("Selection cleared");
            show(game, config);
        }
        ClickOutcome::Ignored => println!("No {} piece on {at}", game.turn()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path))
            .with_context(|| format!("loading settings from {path}"))?,
        None => GameConfig::default(),
    };
    init_tracing(&config.log_level);

    let mut game = Game::from_config(&config).context("setting up the board")?;

    println!("Chess");
    print_usage();
    println!();
    show(&game, &config);

    let stdin = io::stdin();
    loop {
        print!("{} > ", game.turn());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "q" | "exit" => break,
            "help" | "?" => print_usage(),
            "board" => show(&game, &config),
            "reset" => {
                game.reset();
                show(&game, &config);
            }
            "moves" => {
                let moves = all_moves(game.board(), game.turn());
                for (from, to) in &moves {
                    println!("  {from}-{to}");
                }
                println!("{} moves", moves.len());
            }
            _ => match input.parse::<Coord>() {
                Ok(at) => handle_click(&mut game, &config, at),
                Err(e) => eprintln!("Error: {e}"),
            },
        }
    }
    Ok(())
}
