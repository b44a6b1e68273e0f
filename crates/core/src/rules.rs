//! Tunable game rules and the decisions for rule variants that differ between
//! playable builds of the game.
//! This module exists so every variant is a named value rather than an implicit choice.
//! It does not own loading from disk; drivers deserialize it from their own config files.

use serde::{Deserialize, Serialize};

use crate::types::{GameError, Pos};

/// How the race against the adversary is judged when the target is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceRule {
    /// Agent keeps racing while it is no farther from the target than the adversary.
    #[default]
    AllowTie,
    /// Agent only keeps racing while strictly closer than the adversary.
    StrictlyCloser,
}

impl RaceRule {
    pub fn agent_wins_race(self, agent_distance: u32, adversary_distance: u32) -> bool {
        match self {
            RaceRule::AllowTie => agent_distance <= adversary_distance,
            RaceRule::StrictlyCloser => agent_distance < adversary_distance,
        }
    }
}

/// What happens when the agent walks onto the hazard cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardEntry {
    /// The game ends as a loss.
    #[default]
    Fatal,
    /// The agent survives but loses its next move; the adversary still advances.
    SkipTurn,
}

/// Largest accepted grid side.
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub grid_size: usize,
    pub agent_start: Pos,
    pub home: Pos,
    pub adversary_start: Pos,
    /// Capacity of the recent-position queue used by the revisit penalty.
    pub history_len: usize,
    pub race_rule: RaceRule,
    pub hazard_entry: HazardEntry,
    /// The adversary stepping onto the known hazard ends the game in the agent's favour.
    pub adversary_hazard_wins: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_size: 6,
            agent_start: Pos::new(0, 0),
            home: Pos::new(0, 0),
            adversary_start: Pos::new(5, 5),
            history_len: 8,
            race_rule: RaceRule::default(),
            hazard_entry: HazardEntry::default(),
            adversary_hazard_wins: true,
        }
    }
}

impl Rules {
    pub fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.grid_size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_size < 2 {
            return Err(GameError::GridTooSmall { size: self.grid_size });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GameError::GridTooLarge { size: self.grid_size, max: MAX_GRID_SIZE });
        }
        for (what, pos) in [
            ("agent start", self.agent_start),
            ("home", self.home),
            ("adversary start", self.adversary_start),
        ] {
            if !self.in_bounds(pos) {
                return Err(GameError::OutOfBounds { what, pos });
            }
        }
        if self.agent_start == self.adversary_start {
            return Err(GameError::SharedStart { pos: self.agent_start });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert_eq!(Rules::default().validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_bad_layouts() {
        let tiny = Rules { grid_size: 1, ..Rules::default() };
        assert_eq!(tiny.validate(), Err(GameError::GridTooSmall { size: 1 }));

        let huge = Rules { grid_size: 100_000, ..Rules::default() };
        assert_eq!(
            huge.validate(),
            Err(GameError::GridTooLarge { size: 100_000, max: MAX_GRID_SIZE })
        );
        let largest = Rules { grid_size: MAX_GRID_SIZE, ..Rules::default() };
        assert_eq!(largest.validate(), Ok(()));

        let outside = Rules { home: Pos::new(0, 6), ..Rules::default() };
        assert_eq!(
            outside.validate(),
            Err(GameError::OutOfBounds { what: "home", pos: Pos::new(0, 6) })
        );

        let shared = Rules { adversary_start: Pos::new(0, 0), ..Rules::default() };
        assert_eq!(shared.validate(), Err(GameError::SharedStart { pos: Pos::new(0, 0) }));
    }

    #[test]
    fn race_rule_differs_only_on_ties() {
        assert!(RaceRule::AllowTie.agent_wins_race(3, 3));
        assert!(!RaceRule::StrictlyCloser.agent_wins_race(3, 3));
        assert!(RaceRule::StrictlyCloser.agent_wins_race(2, 3));
        assert!(!RaceRule::AllowTie.agent_wins_race(4, 3));
    }
}
