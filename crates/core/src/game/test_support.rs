//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating rules and layout setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::rules::Rules;
use crate::state::GameState;
use crate::world::SimWorld;

pub(super) fn p(row: i32, col: i32) -> Pos {
    Pos { row, col }
}

pub(super) fn rules_with(agent: Pos, adversary: Pos) -> Rules {
    Rules { agent_start: agent, adversary_start: adversary, ..Rules::default() }
}

pub(super) fn state_fixture(agent: Pos, adversary: Pos) -> GameState {
    GameState::new(rules_with(agent, adversary))
}

/// Agent boxed into the top-left corner by known walls on both open sides.
pub(super) fn boxed_corner_fixture() -> GameState {
    let mut state = state_fixture(p(0, 0), p(5, 5));
    state.barriers.record_blocked(p(0, 0), p(0, 1));
    state.barriers.record_blocked(p(0, 0), p(1, 0));
    state
}

/// Game and world sharing one layout: target, hazard and hidden walls fixed.
pub(super) fn scripted_fixture(
    rules: Rules,
    target: Pos,
    hazard: Pos,
    walls: &[(Pos, Pos)],
) -> (Game, SimWorld) {
    let world = SimWorld::with_layout(&rules, target, hazard, walls);
    let game = Game::new(rules).expect("fixture rules should be valid");
    (game, world)
}
