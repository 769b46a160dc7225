use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli_connect_four::cli::GameSession;
use cli_connect_four::config::AppConfig;
use cli_connect_four::game::{Board, GameState};

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "cli_connect_four", about = "Two-player Connect Four on a configurable grid")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override Player 1's token character
    #[arg(long)]
    token_one: Option<char>,

    /// Override Player 2's token character
    #[arg(long)]
    token_two: Option<char>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr; stdout carries the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(token) = cli.token_one {
        config.players.player_one = token;
    }
    if let Some(token) = cli.token_two {
        config.players.player_two = token;
    }
    config.validate().context("validating configuration")?;

    let board = Board::new(config.board.rows, config.board.cols).context("creating board")?;
    info!(
        rows = config.board.rows,
        cols = config.board.cols,
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(stdin.lock(), stdout.lock());
    let outcome = session
        .run(GameState::new(board), &config.players)
        .context("running game session")?;
    info!(?outcome, "session finished");

    Ok(())
}
