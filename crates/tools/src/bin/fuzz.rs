use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use seeker_core::{Game, GameEvent, HazardEntry, RaceRule, Rules, SimWorld, TurnStatus};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

/// Plays many seeded games and checks engine invariants after every turn.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    games: u32,
    #[arg(short, long, default_value_t = 100)]
    turns: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_game(rules: Rules, world_seed: u64, max_turns: u32) -> Result<TurnStatus> {
    let mut world = SimWorld::generate(&rules, world_seed);
    let mut game = Game::new(rules)?;

    for _ in 0..max_turns {
        let before = game.state().agent.pos;
        let status = game.step(&mut world);
        let state = game.state();

        if state.agent.pos != world.agent() {
            bail!("Invariant failed: engine and world disagree on the agent (seed {world_seed})");
        }
        if state.agent.pos != before && !world.walls().can_move(before, state.agent.pos) {
            bail!("Invariant failed: agent walked through a wall (seed {world_seed})");
        }
        if state.known_target.is_some_and(|t| t != world.target()) {
            bail!("Invariant failed: wrong target located (seed {world_seed})");
        }
        if state.known_hazard.is_some_and(|h| h != world.hazard()) {
            bail!("Invariant failed: wrong hazard located (seed {world_seed})");
        }
        for (from, to) in state.barriers.edges() {
            if world.walls().can_move(from, to) {
                bail!("Invariant failed: phantom wall {from:?}-{to:?} (seed {world_seed})");
            }
        }
        if status.is_terminal() {
            break;
        }
    }

    if game.log().iter().any(|e| matches!(e, GameEvent::BeliefReset { .. })) {
        bail!("Invariant failed: exact readings reset the belief (seed {world_seed})");
    }
    Ok(game.status())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} games...", args.seed, args.games);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut wins = 0;
    let mut losses = 0;
    let mut stuck = 0;

    for _ in 0..args.games {
        let rules = Rules {
            race_rule: choose(&mut rng, &[RaceRule::AllowTie, RaceRule::StrictlyCloser]),
            hazard_entry: choose(&mut rng, &[HazardEntry::Fatal, HazardEntry::SkipTurn]),
            ..Rules::default()
        };
        let world_seed = rng.next_u64();
        match check_game(rules, world_seed, args.turns)? {
            TurnStatus::Won(_) => wins += 1,
            TurnStatus::Lost(_) => losses += 1,
            TurnStatus::NoMove | TurnStatus::Continue => stuck += 1,
        }
        info!(world_seed, "game checked");
    }

    println!("Fuzzing completed successfully: {wins} won, {losses} lost, {stuck} unfinished.");
    Ok(())
}
