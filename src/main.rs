use std::{io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tictactoe::{term, GameConfig, GameController, Marker};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe in the terminal, with time travel.
///
/// Enter moves as "x y" (column, row), jump through the history with
/// "goto i" and leave with "q".
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe")]
#[command(version)]
struct Cli {
    /// RON file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the board
    #[arg(short, long)]
    size: Option<usize>,

    /// Who moves first (X or O)
    #[arg(short, long)]
    first: Option<Marker>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(first) = cli.first {
        config.first_player = first;
    }
    config.validate()?;
    info!(?config, "starting game");

    let game = GameController::new(&config)?;
    let stdin = io::stdin();
    let game = term::play(game, stdin.lock(), io::stdout())?;

    info!(status = %game.status(), moves = game.history().moves().len(), "bye");
    Ok(())
}
