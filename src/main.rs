use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hexmate_cli::{Session, SessionConfig};
use hexmate_core::BoardRadius;

/// Hexagonal chess played over stdin.
#[derive(Parser, Debug)]
#[command(name = "hexmate")]
#[command(about = "Hexagonal chess on a cubic-coordinate board", long_about = None)]
#[command(version)]
struct Args {
    /// Board radius, 4 or 5
    #[arg(short, long, default_value = "5")]
    radius: i32,

    /// Do not print the board after each move
    #[arg(long)]
    no_board: bool,

    /// Print the evaluation after each move
    #[arg(long)]
    eval: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig {
        radius: BoardRadius::try_from(args.radius)?,
        show_board_after_move: !args.no_board,
        show_eval: args.eval,
    };
    info!(radius = %config.radius, "hexmate starting");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config).run(stdin.lock(), stdout.lock())?;
    Ok(())
}
