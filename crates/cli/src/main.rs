mod replay;
mod tui;
mod ui;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Start with the move list sorted newest-first
    #[arg(long)]
    descending: bool,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Replay a concatenated move string (e.g. "b2a1c3") and print each position
    Replay {
        /// Moves in algebraic notation, two characters each
        moves: String,
    },
}

fn main() {
    let args = Cli::parse();
    match args.command {
        Some(SubCommands::Replay { moves }) => {
            if let Err(e) = replay::replay(&moves) {
                eprintln!("Error replaying game: {e}");
                std::process::exit(1);
            }
        }
        None => {
            ui::ui_loop(args.descending).unwrap_or_else(|err| {
                eprintln!("Failed to initialize UI: {err}");
            });
        }
    }
}
