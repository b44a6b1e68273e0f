//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn control code.
//! It does not own event logging or rendering.

use std::hash::{Hash, Hasher};

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let state = &self.state;
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.turn);
        hasher.write_u8(u8::from(self.skip_pending));
        self.status().hash(&mut hasher);
        hasher.write_i32(state.agent.pos.row);
        hasher.write_i32(state.agent.pos.col);
        hasher.write_i32(state.adversary.pos.row);
        hasher.write_i32(state.adversary.pos.col);
        state.agent.heading.hash(&mut hasher);
        hasher.write_u8(u8::from(state.agent.carrying));
        state.strategy.hash(&mut hasher);
        state.known_target.hash(&mut hasher);
        state.known_hazard.hash(&mut hasher);
        state.agent.history.hash(&mut hasher);
        state.target_belief.hash(&mut hasher);
        state.hazard_belief.hash(&mut hasher);
        state.barriers.hash(&mut hasher);
        hasher.finish()
    }
}
