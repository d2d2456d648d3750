//! Headless Tetris driver (default binary).
//!
//! Plays one game by applying a scripted list of actions, then lets the
//! automatic drop run for a number of ticks, and prints the final snapshot as
//! JSON on stdout. Logs go to stderr (`RUST_LOG` controls the level).

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetromino::config::SimConfig;
use tetromino::core::{Outcome, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = SimConfig::parse();
    run(&config)
}

fn run(config: &SimConfig) -> Result<()> {
    let actions = config.action_script().context("invalid --actions")?;
    let source = config.piece_source().context("invalid --pieces")?;

    let mut session = Session::new(source);
    let applied = session.dispatch_all(actions.iter().copied());
    info!(applied, scripted = actions.len(), "script finished");

    let mut lines = 0;
    let mut ticks = 0;
    while ticks < config.ticks && !session.state().game_over() {
        if let Outcome::Locked { lines_cleared, .. } = session.tick() {
            lines += lines_cleared;
        }
        ticks += 1;
    }

    let state = session.state();
    info!(
        ticks,
        lines,
        score = state.score(),
        game_over = state.game_over(),
        "simulation finished"
    );

    let snapshot = session.snapshot();
    let json = if config.pretty {
        snapshot.to_json_pretty()
    } else {
        snapshot.to_json()
    }
    .context("failed to serialize snapshot")?;
    println!("{}", json);

    Ok(())
}
