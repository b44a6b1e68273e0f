//! Greedy pursuit rule of the adversary.
//! The same function drives the real adversary and the one-step lookahead in scoring,
//! so both always agree.

use crate::types::Pos;

/// Next adversary position: close the row gap first, then the column gap.
/// Ignores walls. Stays put when already on the agent.
pub fn advance(adversary: Pos, agent: Pos) -> Pos {
    let mut next = adversary;
    if agent.row != adversary.row {
        next.row += (agent.row - adversary.row).signum();
    } else {
        next.col += (agent.col - adversary.col).signum();
    }
    next
}
