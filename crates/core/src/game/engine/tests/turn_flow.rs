//! Tests for the order of sensing, actuation and wall discovery within one turn.

use super::support::*;

fn walled_lane_fixture() -> (Game, SimWorld) {
    let rules = Rules { agent_start: p(2, 1), ..Rules::default() };
    let (mut game, world) = scripted_fixture(rules, p(4, 4), p(0, 5), &[(p(2, 1), p(2, 2))]);
    for blocked in [p(1, 1), p(3, 1), p(2, 0)] {
        game.state.barriers.record_blocked(p(2, 1), blocked);
    }
    (game, world)
}

#[test]
fn first_turn_senses_at_start_before_moving() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    game.step(&mut world);

    assert_eq!(
        game.log().first(),
        Some(&GameEvent::TargetObserved { at: p(0, 0), reading: 2, candidates: 3 })
    );
}

#[test]
fn bump_records_wall_both_ways_and_keeps_agent_in_place() {
    let (mut game, mut world) = walled_lane_fixture();

    assert_eq!(game.step(&mut world), TurnStatus::Continue);
    assert_eq!(game.state.agent.pos, p(2, 1));
    assert!(!game.state.barriers.can_move(p(2, 1), p(2, 2)));
    assert!(!game.state.barriers.can_move(p(2, 2), p(2, 1)));
    assert!(
        game.log().contains(&GameEvent::BarrierDiscovered { from: p(2, 1), to: p(2, 2) }),
        "{}",
        draw_board_diag(&game.state)
    );
}

#[test]
fn adversary_still_advances_after_a_bump() {
    let (mut game, mut world) = walled_lane_fixture();
    game.step(&mut world);
    assert_eq!(game.state.adversary.pos, p(4, 5));
}

#[test]
fn fully_walled_agent_reports_no_move_and_stays_put() {
    let (mut game, mut world) = walled_lane_fixture();
    game.step(&mut world);

    assert_eq!(game.step(&mut world), TurnStatus::NoMove);
    assert_eq!(game.state.agent.pos, p(2, 1));
    assert_eq!(game.log().last(), Some(&GameEvent::NoValidMove));

    let reported = world.events().len();
    assert_eq!(game.step(&mut world), TurnStatus::NoMove);
    assert_eq!(world.events().len(), reported, "finished game must not touch the world");
}

#[test]
fn successful_move_updates_heading_and_history() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    game.step(&mut world);

    assert_eq!(game.state.agent.pos, p(1, 0));
    assert_eq!(game.state.agent.heading, Direction::Down);
    assert_eq!(game.state.agent.history.back(), Some(&p(0, 0)));
    assert_eq!(world.agent(), game.state.agent.pos);
}

#[test]
fn second_reading_pins_down_the_target() {
    let (mut game, mut world) = scripted_fixture(Rules::default(), p(0, 2), p(4, 0), &[]);
    game.step(&mut world);

    assert_eq!(game.state.known_target, Some(p(0, 2)));
    assert!(game.log().contains(&GameEvent::TargetResolved { at: p(0, 2) }));
}

#[test]
fn lost_race_switches_to_luring_once_the_move_lands() {
    let rules = Rules { adversary_start: p(2, 4), ..Rules::default() };
    let (mut game, mut world) = scripted_fixture(rules, p(2, 3), p(5, 0), &[]);
    game.state.known_target = Some(p(2, 3));

    game.step(&mut world);
    assert_eq!(game.state.strategy, Strategy::HazardLure);
    assert!(game.log().contains(&GameEvent::StrategySwitched { to: Strategy::HazardLure }));
}

#[test]
fn hot_reading_marks_neighbors_as_possible() {
    let rules = Rules::default();
    let (mut game, mut world) = scripted_fixture(rules, p(3, 3), p(0, 1), &[]);
    game.state.barriers.record_blocked(p(0, 0), p(0, 1));
    game.state.barriers.record_blocked(p(0, 0), p(1, 0));

    // Walled in: the first turn only senses and then reports no move.
    assert_eq!(game.step(&mut world), TurnStatus::NoMove);
    assert!(game.log().contains(&GameEvent::HazardSignal { at: p(0, 0), hot: true }));
    assert_eq!(game.state.hazard_belief.possible_cells(), vec![p(0, 1), p(1, 0)]);
}
