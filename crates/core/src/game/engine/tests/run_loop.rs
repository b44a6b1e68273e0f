//! Tests for the multi-turn driver.

use super::support::*;

#[test]
fn budget_stops_an_unfinished_game() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    let result = game.run(&mut world, 2);
    assert_eq!(
        result,
        AdvanceResult { simulated_turns: 2, stop_reason: AdvanceStopReason::BudgetExhausted }
    );
    assert_eq!(game.current_turn(), 2);
}

#[test]
fn pause_blocks_until_resume_between_turns() {
    let (mut game, world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    let mut world = world.with_pause_after([1]);

    game.run(&mut world, 2);
    assert_eq!(world.pauses_served(), 1);
    let paused = game.log().iter().position(|e| *e == GameEvent::Paused);
    let resumed = game.log().iter().position(|e| *e == GameEvent::Resumed);
    assert!(paused.is_some() && resumed == paused.map(|i| i + 1));
}

#[test]
fn finished_game_runs_zero_turns() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    let first = game.run(&mut world, 100);
    let AdvanceStopReason::Finished(status) = first.stop_reason else {
        panic!("game should finish within budget: {first:?}");
    };

    let again = game.run(&mut world, 100);
    assert_eq!(again.simulated_turns, 0);
    assert_eq!(again.stop_reason, AdvanceStopReason::Finished(status));
}

#[test]
fn every_logged_event_is_reported_to_the_world() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    game.run(&mut world, 100);
    assert_eq!(world.events(), game.log());
}
