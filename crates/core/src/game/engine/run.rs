//! Multi-turn driver with pause handling between turns.

use super::*;

impl Game {
    /// Plays up to `max_turns` turns, stopping early on a terminal status. A pause
    /// request is honoured between turns by blocking in `wait_for_resume`.
    pub fn run(&mut self, env: &mut dyn Environment, max_turns: u32) -> AdvanceResult {
        if let Some(status) = self.finished {
            return AdvanceResult {
                simulated_turns: 0,
                stop_reason: AdvanceStopReason::Finished(status),
            };
        }

        let mut turns = 0;
        while turns < max_turns {
            let status = self.step(env);
            turns += 1;
            if status.is_terminal() {
                return AdvanceResult {
                    simulated_turns: turns,
                    stop_reason: AdvanceStopReason::Finished(status),
                };
            }

            if env.pause_requested() {
                info!(turn = self.turn, "paused");
                self.emit(env, GameEvent::Paused);
                env.wait_for_resume();
                self.emit(env, GameEvent::Resumed);
            }
        }

        AdvanceResult { simulated_turns: turns, stop_reason: AdvanceStopReason::BudgetExhausted }
    }
}
