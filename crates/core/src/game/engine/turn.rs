//! One synchronous turn of the agent followed by the adversary.

use super::*;

impl Game {
    /// Plays one turn. Once the game is over every further call returns the same status
    /// without touching the environment.
    pub fn step(&mut self, env: &mut dyn Environment) -> TurnStatus {
        if let Some(status) = self.finished {
            return status;
        }
        self.turn += 1;

        if !self.sensed_start {
            self.sensed_start = true;
            self.sense(env);
            if let Some(status) = self.check_agent_cell(env) {
                return status;
            }
        }

        if self.skip_pending {
            self.skip_pending = false;
            self.emit(env, GameEvent::TurnSkipped);
            return self.advance_adversary(env);
        }

        let Some(chosen) = policy::choose_move(&self.state) else {
            return self.finish(env, TurnStatus::NoMove);
        };

        let from = self.state.agent.pos;
        if env.attempt_move(chosen.direction) {
            self.after_agent_moved(env, chosen);
            if let Some(status) = self.check_agent_cell(env) {
                return status;
            }
        } else {
            self.state.barriers.record_blocked(from, chosen.target);
            debug!(?from, to = ?chosen.target, "bumped into wall");
            self.emit(env, GameEvent::BarrierDiscovered { from, to: chosen.target });
        }

        self.advance_adversary(env)
    }

    fn after_agent_moved(&mut self, env: &mut dyn Environment, chosen: MoveScore) {
        let agent = &mut self.state.agent;
        agent.remember(agent.pos);
        agent.pos = chosen.target;
        agent.heading = chosen.direction;
        self.emit(
            env,
            GameEvent::Moved { direction: chosen.direction, to: chosen.target, score: chosen.score },
        );

        if chosen.switch_strategy
            && self.state.phase() == MissionPhase::Searching
            && self.state.strategy == Strategy::TargetRace
        {
            self.state.strategy = Strategy::HazardLure;
            info!(turn = self.turn, "race for the target is lost, luring toward the hazard");
            self.emit(env, GameEvent::StrategySwitched { to: Strategy::HazardLure });
        }

        self.sense(env);
    }

    /// Pickup, home, hazard and capture checks for the cell the agent stands on.
    fn check_agent_cell(&mut self, env: &mut dyn Environment) -> Option<TurnStatus> {
        let pos = self.state.agent.pos;

        if self.state.phase() == MissionPhase::Searching && self.state.known_target == Some(pos) {
            self.state.agent.carrying = true;
            self.state.known_target = None;
            info!(turn = self.turn, "target collected, returning home");
            self.emit(env, GameEvent::TargetCollected { at: pos });
        }

        if self.state.agent.carrying && pos == self.state.rules.home {
            return Some(self.finish(env, TurnStatus::Won(WinReason::ReturnedHome)));
        }

        if self.state.known_hazard == Some(pos) {
            self.emit(env, GameEvent::HazardEntered { at: pos });
            match self.state.rules.hazard_entry {
                HazardEntry::Fatal => {
                    return Some(self.finish(env, TurnStatus::Lost(LossCause::Hazard)));
                }
                HazardEntry::SkipTurn => self.skip_pending = true,
            }
        }

        if pos == self.state.adversary.pos {
            return Some(self.finish(env, TurnStatus::Lost(LossCause::Caught)));
        }
        None
    }
}
