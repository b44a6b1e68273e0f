//! Turn engine composition and the outcome helpers shared by its submodules.
//! This file wires focused engine submodules together.

use tracing::{debug, info};

use super::policy::MoveScore;
use super::*;
use crate::rules::HazardEntry;

mod run;
mod sensing;
mod turn;


impl Game {
    /// Stores a terminal status, reports it and returns it.
    fn finish(&mut self, env: &mut dyn Environment, status: TurnStatus) -> TurnStatus {
        match status {
            TurnStatus::Won(reason) => self.emit(env, GameEvent::Won(reason)),
            TurnStatus::Lost(cause) => self.emit(env, GameEvent::Lost(cause)),
            TurnStatus::NoMove => self.emit(env, GameEvent::NoValidMove),
            TurnStatus::Continue => return status,
        }
        info!(turn = self.turn, ?status, "game finished");
        self.finished = Some(status);
        status
    }

    fn advance_adversary(&mut self, env: &mut dyn Environment) -> TurnStatus {
        let agent = self.state.agent.pos;
        let next = adversary::advance(self.state.adversary.pos, agent);
        if next != self.state.adversary.pos {
            self.state.adversary.pos = next;
            debug!(row = next.row, col = next.col, "adversary advanced");
            self.emit(env, GameEvent::AdversaryMoved { to: next });
        }

        if next == agent {
            return self.finish(env, TurnStatus::Lost(LossCause::Caught));
        }
        if self.state.rules.adversary_hazard_wins && self.state.known_hazard == Some(next) {
            return self.finish(env, TurnStatus::Won(WinReason::AdversaryTrapped));
        }
        TurnStatus::Continue
    }
}
