//! Seeded simulated world that stands in for the physical board.
//! This module exists so the engine can be driven end to end without hardware.
//! It does not own decision logic; it only answers readings and moves truthfully.

use std::collections::BTreeSet;

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::debug;

use crate::environment::Environment;
use crate::game::barriers::BarrierGraph;
use crate::rules::Rules;
use crate::types::*;

pub const MIN_WALLS: usize = 5;
pub const MAX_WALLS: usize = 10;

/// Ground truth for one game: where the target, the hazard and the hidden walls are.
#[derive(Clone, Debug)]
pub struct SimWorld {
    size: usize,
    agent: Pos,
    target: Pos,
    hazard: Pos,
    walls: BarrierGraph,
    pause_after: BTreeSet<u32>,
    polls: u32,
    pauses_served: u32,
    events: Vec<GameEvent>,
}

impl SimWorld {
    /// Random layout. Target and hazard avoid the agent start, the adversary start, home
    /// and each other. Between `MIN_WALLS` and `MAX_WALLS` walls are placed.
    pub fn generate(rules: &Rules, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reserved = [rules.agent_start, rules.adversary_start, rules.home];
        let size = rules.grid_size as i32;
        let mut open: Vec<Pos> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Pos { row, col }))
            .filter(|pos| !reserved.contains(pos))
            .collect();

        let target = take_random(&mut rng, &mut open).unwrap_or(rules.agent_start);
        let hazard = take_random(&mut rng, &mut open).unwrap_or(rules.agent_start);

        let wanted = MIN_WALLS + rng.next_u64() as usize % (MAX_WALLS - MIN_WALLS + 1);
        let mut walls = BarrierGraph::new();
        let mut attempts = 0;
        while walls.len() < wanted && attempts < wanted * 50 {
            attempts += 1;
            let from = Pos {
                row: (rng.next_u64() % rules.grid_size as u64) as i32,
                col: (rng.next_u64() % rules.grid_size as u64) as i32,
            };
            let dir = Direction::ALL[rng.next_u64() as usize % Direction::ALL.len()];
            let to = from.step(dir);
            if rules.in_bounds(to) {
                walls.record_blocked(from, to);
            }
        }
        debug!(seed, ?target, ?hazard, walls = walls.len(), "generated world");

        Self::assemble(rules, target, hazard, walls)
    }

    /// Fixed layout. `walls` lists adjacent cell pairs; each blocks both directions.
    pub fn with_layout(rules: &Rules, target: Pos, hazard: Pos, walls: &[(Pos, Pos)]) -> Self {
        let mut graph = BarrierGraph::new();
        for (from, to) in walls {
            graph.record_blocked(*from, *to);
        }
        Self::assemble(rules, target, hazard, graph)
    }

    /// Requests a pause after each listed turn number (counted from 1).
    pub fn with_pause_after(mut self, turns: impl IntoIterator<Item = u32>) -> Self {
        self.pause_after.extend(turns);
        self
    }

    fn assemble(rules: &Rules, target: Pos, hazard: Pos, walls: BarrierGraph) -> Self {
        Self {
            size: rules.grid_size,
            agent: rules.agent_start,
            target,
            hazard,
            walls,
            pause_after: BTreeSet::new(),
            polls: 0,
            pauses_served: 0,
            events: Vec::new(),
        }
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn target(&self) -> Pos {
        self.target
    }

    pub fn hazard(&self) -> Pos {
        self.hazard
    }

    pub fn walls(&self) -> &BarrierGraph {
        &self.walls
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn pauses_served(&self) -> u32 {
        self.pauses_served
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }
}

impl Environment for SimWorld {
    fn read_distance_proxy(&mut self, probe: Probe) -> Option<u32> {
        match probe {
            Probe::Target => Some(manhattan(self.agent, self.target)),
            Probe::Hazard => match manhattan(self.agent, self.hazard) {
                reading @ (0 | 1) => Some(reading),
                _ => None,
            },
        }
    }

    fn attempt_move(&mut self, direction: Direction) -> bool {
        let next = self.agent.step(direction);
        if !self.in_bounds(next) || !self.walls.can_move(self.agent, next) {
            return false;
        }
        self.agent = next;
        true
    }

    fn pause_requested(&mut self) -> bool {
        self.polls += 1;
        self.pause_after.contains(&self.polls)
    }

    fn wait_for_resume(&mut self) {
        self.pauses_served += 1;
    }

    fn report(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

fn take_random(rng: &mut ChaCha8Rng, cells: &mut Vec<Pos>) -> Option<Pos> {
    if cells.is_empty() {
        return None;
    }
    let index = rng.next_u64() as usize % cells.len();
    Some(cells.swap_remove(index))
}
