//! Phase-aware move scoring and selection.
//! This module exists to keep every scoring weight and its branch order in one place.
//! It does not own state mutation; the engine applies the chosen move.

use tracing::debug;

use super::adversary;
use super::search::find_nearest_zero;
use crate::rules::HazardEntry;
use crate::state::GameState;
use crate::types::*;

/// Upper bound on grid distances that distance rewards are measured against.
pub const DISTANCE_CEILING: i32 = 10;
const DISTANCE_WEIGHT: i32 = 10;

const HOME_BONUS: i32 = 1000;
const COLLISION_PENALTY: i32 = 2000;
const SHARED_LINE_PENALTY: i32 = 15;
const RACE_LOST_PENALTY: i32 = 35;
const SEARCH_PROGRESS_BONUS: i32 = 100;
const LURE_JACKPOT: i32 = 1500;
const LURE_STEP_WEIGHT: i32 = 50;
const LURE_MISS_PENALTY: i32 = 15;
const REVISIT_WEIGHT: i32 = 5;
const FATAL_HAZARD_PENALTY: i32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveScore {
    pub direction: Direction,
    pub target: Pos,
    /// Where the adversary would step if the agent moved to `target`.
    pub adversary_next: Pos,
    pub score: i32,
    /// The known-target race is lost from `target`; searching should switch to luring.
    pub switch_strategy: bool,
}

/// In-bounds neighbors not separated from the agent by a known wall.
pub fn legal_moves(state: &GameState) -> Vec<(Direction, Pos)> {
    let from = state.agent.pos;
    Direction::ALL
        .into_iter()
        .map(|dir| (dir, from.step(dir)))
        .filter(|(_, to)| state.rules.in_bounds(*to) && state.barriers.can_move(from, *to))
        .collect()
}

/// Best legal move; the first direction in `Direction::ALL` order wins ties.
/// `None` when every direction is out of bounds or walled off.
pub fn choose_move(state: &GameState) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for (direction, target) in legal_moves(state) {
        let scored = evaluate_move(state, direction, target);
        debug!(
            ?direction,
            row = target.row,
            col = target.col,
            score = scored.score,
            switch = scored.switch_strategy,
            "scored candidate move"
        );
        if best.is_none_or(|current| scored.score > current.score) {
            best = Some(scored);
        }
    }
    best
}

pub fn evaluate_move(state: &GameState, direction: Direction, candidate: Pos) -> MoveScore {
    let adversary_next = adversary::advance(state.adversary.pos, candidate);
    let (score, switch_strategy) = match state.phase() {
        MissionPhase::ReturningHome => {
            let phase_score = return_home_score(state, candidate, adversary_next);
            (phase_score - fatal_hazard_penalty(state, candidate), false)
        }
        MissionPhase::Searching => {
            let (phase_score, switch) = searching_score(state, candidate, adversary_next);
            let penalty = universal_penalties(state, candidate, adversary_next)
                + fatal_hazard_penalty(state, candidate);
            (phase_score - penalty, switch)
        }
    };
    MoveScore { direction, target: candidate, adversary_next, score, switch_strategy }
}

/// Carries its own collision term and skips the universal penalties. The fatal hazard
/// penalty still applies.
fn return_home_score(state: &GameState, candidate: Pos, adversary_next: Pos) -> i32 {
    let home = state.rules.home;
    let mut score = distance_reward(manhattan(candidate, home));
    if candidate == home {
        score += HOME_BONUS;
    }
    if candidate == adversary_next {
        score -= COLLISION_PENALTY;
    }
    if candidate.shares_line_with(state.adversary.pos) {
        score -= SHARED_LINE_PENALTY;
    }
    score
}

fn searching_score(state: &GameState, candidate: Pos, adversary_next: Pos) -> (i32, bool) {
    if state.strategy == Strategy::HazardLure
        && let Some(hazard) = state.known_hazard
    {
        return (lure_score(state.adversary.pos, candidate, adversary_next, hazard), false);
    }

    if let Some(target) = state.known_target {
        let ours = manhattan(candidate, target);
        let theirs = manhattan(adversary_next, target);
        if state.rules.race_rule.agent_wins_race(ours, theirs) {
            return (distance_reward(ours), false);
        }
        return (-RACE_LOST_PENALTY, true);
    }

    let barriers = &state.barriers;
    let belief = &state.target_belief;
    let progress = find_nearest_zero(belief, barriers, state.agent.pos)
        .zip(find_nearest_zero(belief, barriers, candidate))
        .is_some_and(|(here, there)| there.distance < here.distance);
    (if progress { SEARCH_PROGRESS_BONUS } else { 0 }, false)
}

fn lure_score(adversary_now: Pos, candidate: Pos, adversary_next: Pos, hazard: Pos) -> i32 {
    if candidate == hazard && adversary_next == hazard {
        return LURE_JACKPOT;
    }
    let before = manhattan(adversary_now, hazard);
    let after = manhattan(adversary_next, hazard);
    if after < before { LURE_STEP_WEIGHT * (before - after) as i32 } else { -LURE_MISS_PENALTY }
}

fn universal_penalties(state: &GameState, candidate: Pos, adversary_next: Pos) -> i32 {
    let mut penalty = 0;
    if candidate == adversary_next {
        penalty += COLLISION_PENALTY;
    }
    penalty + revisit_penalty(state, candidate)
}

/// Applies in both phases.
fn fatal_hazard_penalty(state: &GameState, candidate: Pos) -> i32 {
    if state.rules.hazard_entry == HazardEntry::Fatal && state.known_hazard == Some(candidate) {
        FATAL_HAZARD_PENALTY
    } else {
        0
    }
}

/// Heaviest for the most recently left cell, fading with age.
fn revisit_penalty(state: &GameState, candidate: Pos) -> i32 {
    let history = &state.agent.history;
    history
        .iter()
        .rev()
        .position(|pos| *pos == candidate)
        .map_or(0, |age| REVISIT_WEIGHT * (history.len() - age) as i32)
}

fn distance_reward(distance: u32) -> i32 {
    (DISTANCE_CEILING - distance as i32) * DISTANCE_WEIGHT
}
