//! Plain-text renderings of the board and both beliefs.
//! This module exists for drivers and failing-test messages that need to show what the agent knows.
//! It does not own any decision logic.

use super::belief::BeliefGrid;
use super::hazard::{HazardCell, HazardGrid};
use super::search::{SearchHit, find_nearest_suspected_hazard, find_nearest_zero_toward};
use crate::state::GameState;
use crate::types::Pos;

/// One row per grid row, candidate distances right-aligned, `-` where nothing is derived.
pub fn draw_belief_diag(belief: &BeliefGrid) -> String {
    let mut text = String::new();
    let size = belief.size() as i32;
    for row in 0..size {
        for col in 0..size {
            match belief.get(Pos { row, col }) {
                Some(value) => text.push_str(&format!("{value:>3}")),
                None => text.push_str("  -"),
            }
        }
        text.push('\n');
    }
    text
}

/// `?` unknown, `o` possible, `!` hot reading, `x` ruled out.
pub fn draw_hazard_diag(hazard: &HazardGrid) -> String {
    let mut text = String::new();
    let size = hazard.size() as i32;
    for row in 0..size {
        for col in 0..size {
            let c = match hazard.get(Pos { row, col }) {
                HazardCell::Unknown => '?',
                HazardCell::Possible => 'o',
                HazardCell::Hot => '!',
                HazardCell::Excluded => 'x',
            };
            text.push(' ');
            text.push(c);
        }
        text.push('\n');
    }
    text
}

/// Agent `R`, adversary `B`, known target `M`, known hazard `T`, home `H`, followed by
/// the known walls around each cell as `U`/`D`/`L`/`R`.
pub fn draw_board_diag(state: &GameState) -> String {
    let mut text = String::new();
    let size = state.rules.grid_size as i32;
    for row in 0..size {
        for col in 0..size {
            let p = Pos { row, col };
            let c = if p == state.agent.pos {
                'R'
            } else if p == state.adversary.pos {
                'B'
            } else if state.known_target == Some(p) {
                'M'
            } else if state.known_hazard == Some(p) {
                'T'
            } else if p == state.rules.home {
                'H'
            } else {
                '.'
            };
            let blocked: String =
                state.barriers.blocked_directions(p).into_iter().map(|dir| dir.label()).collect();
            text.push_str(&format!("{c}{blocked:<4} "));
        }
        text.push('\n');
    }
    text
}

/// Nearest target candidate, ties broken toward the current heading, and nearest
/// suspected hazard cell, both by path length around known walls.
pub fn draw_route_diag(state: &GameState) -> String {
    let agent = &state.agent;
    let target = find_nearest_zero_toward(
        &state.target_belief,
        &state.barriers,
        agent.pos,
        agent.heading,
    );
    let hazard = find_nearest_suspected_hazard(&state.hazard_belief, &state.barriers, agent.pos);
    format!(
        "nearest target candidate: {}\nnearest suspected hazard: {}\n",
        describe_hit(target),
        describe_hit(hazard)
    )
}

fn describe_hit(hit: Option<SearchHit>) -> String {
    match hit {
        Some(SearchHit { pos, distance }) => {
            format!("({}, {}) in {distance} steps", pos.row, pos.col)
        }
        None => "none".to_string(),
    }
}
