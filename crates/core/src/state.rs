use std::collections::VecDeque;

use serde::Serialize;

use crate::game::barriers::BarrierGraph;
use crate::game::belief::BeliefGrid;
use crate::game::hazard::HazardGrid;
use crate::rules::Rules;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct AgentState {
    pub pos: Pos,
    pub heading: Direction,
    pub carrying: bool,
    /// Cells recently left, oldest first.
    pub history: VecDeque<Pos>,
    history_cap: usize,
}

impl AgentState {
    pub fn new(pos: Pos, history_cap: usize) -> Self {
        Self {
            pos,
            heading: Direction::Right,
            carrying: false,
            history: VecDeque::with_capacity(history_cap),
            history_cap,
        }
    }

    pub fn phase(&self) -> MissionPhase {
        if self.carrying { MissionPhase::ReturningHome } else { MissionPhase::Searching }
    }

    pub fn remember(&mut self, pos: Pos) {
        if self.history_cap == 0 {
            return;
        }
        if self.history.len() == self.history_cap {
            self.history.pop_front();
        }
        self.history.push_back(pos);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdversaryState {
    pub pos: Pos,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub rules: Rules,
    pub agent: AgentState,
    pub adversary: AdversaryState,
    pub target_belief: BeliefGrid,
    pub hazard_belief: HazardGrid,
    pub barriers: BarrierGraph,
    pub known_target: Option<Pos>,
    pub known_hazard: Option<Pos>,
    pub strategy: Strategy,
}

impl GameState {
    pub fn new(rules: Rules) -> Self {
        let size = rules.grid_size;
        Self {
            agent: AgentState::new(rules.agent_start, rules.history_len),
            adversary: AdversaryState { pos: rules.adversary_start },
            target_belief: BeliefGrid::new(size),
            hazard_belief: HazardGrid::new(size),
            barriers: BarrierGraph::new(),
            known_target: None,
            known_hazard: None,
            strategy: Strategy::TargetRace,
            rules,
        }
    }

    pub fn phase(&self) -> MissionPhase {
        self.agent.phase()
    }
}

/// Read-only view of one game, for display and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub turn: u32,
    pub status: TurnStatus,
    pub phase: MissionPhase,
    pub strategy: Strategy,
    pub agent: Pos,
    pub heading: Direction,
    pub carrying: bool,
    pub adversary: Pos,
    pub home: Pos,
    pub known_target: Option<Pos>,
    pub known_hazard: Option<Pos>,
    pub target_candidates: Vec<Pos>,
    pub target_belief: BeliefGrid,
    pub hazard_belief: HazardGrid,
    pub barriers: Vec<(Pos, Pos)>,
}
