//! Boundary between the decision engine and whatever moves and senses for it.
//! This module exists so the engine never touches motors, sensors or displays directly.
//! It does not own any game rule; implementations only answer questions and carry out moves.

use crate::types::{Direction, GameEvent, Probe};

/// Physical or simulated world the engine plays in.
///
/// Every call may block. The engine calls these from a single thread, one turn at a time.
pub trait Environment {
    /// Scalar proxy reading at the agent's current cell. `None` means no usable
    /// signal this turn.
    ///
    /// For `Probe::Target` the reading is the Manhattan distance to the target. For
    /// `Probe::Hazard` it is `0` on the hazard, `1` when orthogonally adjacent, and
    /// `None` otherwise.
    fn read_distance_proxy(&mut self, probe: Probe) -> Option<u32>;

    /// Moves the agent one cell. `false` means it bumped into a wall and did not move.
    fn attempt_move(&mut self, direction: Direction) -> bool;

    fn pause_requested(&mut self) -> bool {
        false
    }

    /// Blocks until play may continue. Only called after `pause_requested` returned `true`.
    fn wait_for_resume(&mut self) {}

    /// Fire-and-forget feedback sink.
    fn report(&mut self, _event: &GameEvent) {}
}
