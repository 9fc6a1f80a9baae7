//! Knight's Tour from the command line.
//!
//! ## Usage
//!
//! - `knights-tour` - Play through the text protocol on stdin/stdout
//! - `knights-tour play` - Same as above
//! - `knights-tour demo [--seed N] [--start d5]` - Watch a random walk
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every transition.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use knights_tour::board::{parse_coord, str_coord};
use knights_tour::game::Game;
use knights_tour::playout::random_walk;
use knights_tour::protocol::Session;

/// Knight's Tour: cover the board with knight jumps
#[derive(Parser)]
#[command(name = "knights-tour")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through the line-oriented text protocol
    Play,
    /// Cover the board with a random walk and print the result
    Demo {
        /// Seed for the random walk
        #[arg(long)]
        seed: Option<u64>,
        /// Starting square in chess notation (random if omitted)
        #[arg(long)]
        start: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play) | None => {
            info!("starting text protocol session");
            let mut session = Session::new();
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo { seed, start }) => run_demo(seed, start.as_deref()),
    }
}

fn run_demo(seed: Option<u64>, start: Option<&str>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut game = Game::new();

    if let Some(square) = start {
        let (row, col) =
            parse_coord(square).with_context(|| format!("invalid start square: {square}"))?;
        if !game.play(row as i32, col as i32) {
            bail!("cannot start on {square}");
        }
    }

    let played = random_walk(&mut game, &mut rng);

    println!("Knight's Tour: random walk\n");
    println!("{}", game.board());
    println!("{}", game.status());
    let path: Vec<String> = game.moves().into_iter().map(str_coord).collect();
    println!("Path ({} random moves): {}", played.len(), path.join(" "));
    Ok(())
}
