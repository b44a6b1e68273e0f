use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use seeker_core::game::diag::{
    draw_belief_diag, draw_board_diag, draw_hazard_diag, draw_route_diag,
};
use seeker_core::{AdvanceStopReason, Game, GameEvent, SimWorld, Snapshot};
use serde::Serialize;
use tracing_subscriber::filter::EnvFilter;

mod config;

/// Plays one game against a seeded simulated world.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the world layout
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Maximum number of turns to play
    #[arg(short, long, default_value_t = 100)]
    turns: u32,
    /// TOML rules file; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print a JSON report instead of text diagnostics
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    turns_played: u32,
    snapshot: Snapshot,
    snapshot_hash: u64,
    events: &'a [GameEvent],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rules = config::load_rules(args.config.as_deref())?;
    let mut world = SimWorld::generate(&rules, args.seed);
    let mut game = Game::new(rules).context("Failed to start game")?;
    let result = game.run(&mut world, args.turns);

    if args.json {
        let report = Report {
            seed: args.seed,
            turns_played: result.simulated_turns,
            snapshot: game.state_snapshot(),
            snapshot_hash: game.snapshot_hash(),
            events: game.log(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let state = game.state();
    println!("Seed: {}", args.seed);
    println!("Target: {:?}  Hazard: {:?}", world.target(), world.hazard());
    println!("Turns played: {}", result.simulated_turns);
    match result.stop_reason {
        AdvanceStopReason::Finished(status) => println!("Outcome: {status:?}"),
        AdvanceStopReason::BudgetExhausted => println!("Outcome: turn budget exhausted"),
    }
    println!("Snapshot Hash: {}", game.snapshot_hash());
    println!("\nBoard:\n{}", draw_board_diag(state));
    println!("Target belief:\n{}", draw_belief_diag(&state.target_belief));
    println!("Hazard belief:\n{}", draw_hazard_diag(&state.hazard_belief));
    print!("{}", draw_route_diag(state));

    Ok(())
}
