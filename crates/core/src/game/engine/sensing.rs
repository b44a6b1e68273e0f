//! Proxy readings folded into the target and hazard beliefs.

use super::*;

impl Game {
    /// Reads both proxies at the agent's cell. Probes whose entity is already known
    /// are skipped, as is the target probe once the target is carried.
    pub(super) fn sense(&mut self, env: &mut dyn Environment) {
        let at = self.state.agent.pos;

        if self.state.phase() == MissionPhase::Searching
            && self.state.known_target.is_none()
            && let Some(reading) = env.read_distance_proxy(Probe::Target)
        {
            self.observe_target(env, at, reading);
        }

        if self.state.known_hazard.is_none() {
            let reading = env.read_distance_proxy(Probe::Hazard);
            self.observe_hazard(env, at, reading);
        }
    }

    fn observe_target(&mut self, env: &mut dyn Environment, at: Pos, reading: u32) {
        let observation = self.state.target_belief.observe(reading, at);
        debug!(?at, reading, candidates = observation.candidates, "target reading");
        if observation.reset {
            info!(?at, reading, "target readings contradicted each other, belief re-seeded");
            self.emit(env, GameEvent::BeliefReset { at, reading });
        }
        self.emit(
            env,
            GameEvent::TargetObserved { at, reading, candidates: observation.candidates },
        );

        let resolved = if reading == 0 {
            Some(at)
        } else if let [only] = self.state.target_belief.zero_candidates().as_slice() {
            Some(*only)
        } else {
            None
        };
        if let Some(target) = resolved {
            self.state.known_target = Some(target);
            info!(row = target.row, col = target.col, "target located");
            self.emit(env, GameEvent::TargetResolved { at: target });
        }
    }

    fn observe_hazard(&mut self, env: &mut dyn Environment, at: Pos, reading: Option<u32>) {
        let hazard = &mut self.state.hazard_belief;
        let resolved = match reading {
            Some(0) => {
                hazard.observe_on_hazard(at);
                Some(at)
            }
            Some(1) => {
                hazard.observe_hot(at);
                self.emit(env, GameEvent::HazardSignal { at, hot: true });
                self.state.hazard_belief.resolve()
            }
            _ => {
                hazard.observe_cold(at);
                self.emit(env, GameEvent::HazardSignal { at, hot: false });
                self.state.hazard_belief.resolve()
            }
        };
        if let Some(spot) = resolved {
            self.state.known_hazard = Some(spot);
            info!(row = spot.row, col = spot.col, "hazard located");
            self.emit(env, GameEvent::HazardResolved { at: spot });
        }
    }
}
