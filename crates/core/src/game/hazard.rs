//! Hazard localization from binary "hot / not hot" readings.
//! A hot reading only says the hazard is orthogonally adjacent, so this grid keeps
//! per-cell suspicion states instead of distances.

use serde::Serialize;

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HazardCell {
    #[default]
    Unknown,
    /// Adjacent to a hot reading and not yet ruled out.
    Possible,
    /// A hot reading was taken here. Permanent.
    Hot,
    /// Ruled out. Permanent.
    Excluded,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HazardGrid {
    size: usize,
    cells: Vec<HazardCell>,
}

impl HazardGrid {
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![HazardCell::Unknown; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    /// Out-of-bounds cells read as `Excluded`.
    pub fn get(&self, pos: Pos) -> HazardCell {
        if !self.in_bounds(pos) {
            return HazardCell::Excluded;
        }
        self.cells[self.index(pos)]
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos { row, col }))
    }

    pub fn possible_cells(&self) -> Vec<Pos> {
        self.positions().filter(|pos| self.get(*pos) == HazardCell::Possible).collect()
    }

    pub fn hot_cells(&self) -> Vec<Pos> {
        self.positions().filter(|pos| self.get(*pos) == HazardCell::Hot).collect()
    }

    pub fn observe_hot(&mut self, at: Pos) {
        self.set(at, HazardCell::Hot);
        for neighbor in at.neighbors() {
            if self.in_bounds(neighbor) && self.get(neighbor) == HazardCell::Unknown {
                self.set(neighbor, HazardCell::Possible);
            }
        }
    }

    /// Rules out `at` and every merely-possible neighbor. Unknown neighbors are left
    /// alone, so a later hot reading can still raise them to possible.
    pub fn observe_cold(&mut self, at: Pos) {
        if self.get(at) != HazardCell::Hot {
            self.set(at, HazardCell::Excluded);
        }
        for neighbor in at.neighbors() {
            if self.get(neighbor) == HazardCell::Possible {
                self.set(neighbor, HazardCell::Excluded);
            }
        }
    }

    /// Marks the cell the agent is standing on as the hazard itself.
    pub fn observe_on_hazard(&mut self, at: Pos) {
        if self.get(at) == HazardCell::Unknown {
            self.set(at, HazardCell::Possible);
        }
    }

    /// Single remaining possible cell, or the single possible cell adjacent to every
    /// hot reading when at least two hot readings exist.
    pub fn resolve(&self) -> Option<Pos> {
        if let [only] = self.possible_cells().as_slice() {
            return Some(*only);
        }

        let hot = self.hot_cells();
        if hot.len() < 2 {
            return None;
        }
        let mut shared: Option<Vec<Pos>> = None;
        for spot in hot {
            let around: Vec<Pos> = spot
                .neighbors()
                .into_iter()
                .filter(|n| self.get(*n) == HazardCell::Possible)
                .collect();
            shared = Some(match shared {
                None => around,
                Some(prev) => prev.into_iter().filter(|pos| around.contains(pos)).collect(),
            });
        }
        match shared.as_deref() {
            Some([only]) => Some(*only),
            _ => None,
        }
    }

    fn set(&mut self, pos: Pos, cell: HazardCell) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.size + (pos.col as usize)
    }
}
