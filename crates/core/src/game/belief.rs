//! Target localization from scalar distance readings.
//!
//! Each cell holds either a candidate distance to the hidden target or nothing
//! (eliminated / never derived). A reading `r` taken at `p` stamps a *ring*: every
//! cell gets `|r - manhattan(p, cell)|`, so the cells holding zero are exactly the
//! cells at distance `r` from `p`. Successive rings are intersected cell by cell,
//! and the surviving zero-candidates are then re-expanded into a consistent
//! distance field (`populate`).
//!
//! The zero set after `observe` is the intersection of the zero sets of every ring
//! since the last reset, so it never grows and never loses the true target as long
//! as readings are exact.

use serde::Serialize;

use crate::types::{Pos, manhattan};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BeliefGrid {
    size: usize,
    cells: Vec<Option<u32>>,
}

/// Result of folding one reading into a belief grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub candidates: usize,
    /// The reading contradicted every surviving candidate and the grid was re-seeded from it.
    pub reset: bool,
}

impl BeliefGrid {
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    /// Ring of all cells consistent with a single reading taken at `origin`.
    pub fn ring(size: usize, reading: u32, origin: Pos) -> Self {
        let mut grid = Self::new(size);
        grid.stamp_ring(reading, origin);
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    /// Candidate distance at `pos`. Unknown and out-of-bounds cells both read as `None`.
    pub fn get(&self, pos: Pos) -> Option<u32> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Pos, value: Option<u32>) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    pub fn is_zero(&self, pos: Pos) -> bool {
        self.get(pos) == Some(0)
    }

    pub fn has_numbers(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// Zero-candidates in row-major order.
    pub fn zero_candidates(&self) -> Vec<Pos> {
        self.positions().filter(|pos| self.is_zero(*pos)).collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos { row, col }))
    }

    /// Folds a reading taken at `at` into the grid.
    pub fn observe(&mut self, reading: u32, at: Pos) -> Observation {
        let fresh = Self::ring(self.size, reading, at);
        let had_numbers = self.has_numbers();
        if had_numbers {
            self.intersect(&fresh);
        } else {
            *self = fresh.clone();
        }

        let (populated, candidates) = self.populate();
        if candidates == 0 && had_numbers {
            let (reseeded, candidates) = fresh.populate();
            *self = reseeded;
            return Observation { candidates, reset: true };
        }
        *self = populated;
        Observation { candidates, reset: false }
    }

    /// Rebuilds the distance field from the current zero-candidates: every cell gets
    /// its distance to the nearest candidate. Without candidates the grid is returned
    /// unchanged with a count of zero.
    pub fn populate(&self) -> (BeliefGrid, usize) {
        let zeros = self.zero_candidates();
        let Some((first, rest)) = zeros.split_first() else {
            return (self.clone(), 0);
        };
        let mut result = Self::ring(self.size, 0, *first);
        for zero in rest {
            result.keep_min(&Self::ring(self.size, 0, *zero));
        }
        (result, zeros.len())
    }

    fn stamp_ring(&mut self, reading: u32, origin: Pos) {
        for pos in self.positions() {
            let value = reading.abs_diff(manhattan(origin, pos));
            self.set(pos, Some(value));
        }
    }

    /// Eliminates every cell whose value disagrees with `other`.
    fn intersect(&mut self, other: &BeliefGrid) {
        for (cell, theirs) in self.cells.iter_mut().zip(&other.cells) {
            if *cell != *theirs {
                *cell = None;
            }
        }
    }

    fn keep_min(&mut self, other: &BeliefGrid) {
        for (cell, theirs) in self.cells.iter_mut().zip(&other.cells) {
            *cell = match (*cell, *theirs) {
                (Some(mine), Some(theirs)) => Some(mine.min(theirs)),
                (mine, theirs) => mine.or(theirs),
            };
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.size + (pos.col as usize)
    }
}
