//! Walls discovered by bumping into them.
//! This module exists so every movement legality check goes through one symmetric edge set.
//! It does not own grid bounds; callers check those first.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::{Direction, Pos};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BarrierGraph {
    edges: BTreeSet<(Pos, Pos)>,
}

impl BarrierGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_move(&self, from: Pos, to: Pos) -> bool {
        !self.edges.contains(&(from, to))
    }

    /// Records a failed transition in both directions. Returns `false` when the edge
    /// was already known.
    pub fn record_blocked(&mut self, from: Pos, to: Pos) -> bool {
        let added = self.edges.insert((from, to));
        self.edges.insert((to, from));
        added
    }

    /// Blocked directions out of `pos`, in `Direction::ALL` order.
    pub fn blocked_directions(&self, pos: Pos) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|dir| !self.can_move(pos, pos.step(*dir))).collect()
    }

    /// Number of undirected walls.
    pub fn len(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = (Pos, Pos)> + '_ {
        self.edges.iter().copied().filter(|(a, b)| a < b)
    }
}
