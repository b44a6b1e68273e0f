use tracing::info;

use crate::environment::Environment;
use crate::rules::Rules;
use crate::state::{GameState, Snapshot};
use crate::types::*;

pub mod adversary;
pub mod barriers;
pub mod belief;
pub mod diag;
mod engine;
pub mod hazard;
mod hash;
pub mod policy;
pub mod search;

#[cfg(test)]
mod test_support;

/// One game between the agent and the adversary.
pub struct Game {
    turn: u32,
    state: GameState,
    log: Vec<GameEvent>,
    sensed_start: bool,
    /// The agent entered the hazard under the skip-turn rule and loses its next move.
    skip_pending: bool,
    finished: Option<TurnStatus>,
}

impl Game {
    pub fn new(rules: Rules) -> Result<Self, GameError> {
        rules.validate()?;
        info!(
            grid = rules.grid_size,
            race_rule = ?rules.race_rule,
            hazard_entry = ?rules.hazard_entry,
            "new game"
        );
        Ok(Self {
            turn: 0,
            state: GameState::new(rules),
            log: Vec::new(),
            sensed_start: false,
            skip_pending: false,
            finished: None,
        })
    }

    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    pub fn status(&self) -> TurnStatus {
        self.finished.unwrap_or(TurnStatus::Continue)
    }

    pub fn phase(&self) -> MissionPhase {
        self.state.phase()
    }

    pub fn state_snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            turn: self.turn,
            status: self.status(),
            phase: state.phase(),
            strategy: state.strategy,
            agent: state.agent.pos,
            heading: state.agent.heading,
            carrying: state.agent.carrying,
            adversary: state.adversary.pos,
            home: state.rules.home,
            known_target: state.known_target,
            known_hazard: state.known_hazard,
            target_candidates: state.target_belief.zero_candidates(),
            target_belief: state.target_belief.clone(),
            hazard_belief: state.hazard_belief.clone(),
            barriers: state.barriers.edges().collect(),
        }
    }

    fn emit(&mut self, env: &mut dyn Environment, event: GameEvent) {
        env.report(&event);
        self.log.push(event);
    }
}
