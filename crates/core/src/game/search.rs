//! Breadth-first nearest-candidate search over belief grids.
//! This module exists so routing toward unresolved candidates is shared by scoring and diagnostics.
//! It does not own scoring weights or belief updates.

use std::collections::{BTreeMap, VecDeque, btree_map::Entry};

use super::barriers::BarrierGraph;
use super::belief::BeliefGrid;
use super::hazard::{HazardCell, HazardGrid};
use crate::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub pos: Pos,
    pub distance: u16,
}

pub fn find_nearest_zero(
    belief: &BeliefGrid,
    barriers: &BarrierGraph,
    start: Pos,
) -> Option<SearchHit> {
    find_nearest(belief.size(), barriers, start, None, |pos| belief.is_zero(pos))
}

/// Like `find_nearest_zero`, but among the nearest candidates prefers one whose path
/// starts by stepping in `heading`.
pub fn find_nearest_zero_toward(
    belief: &BeliefGrid,
    barriers: &BarrierGraph,
    start: Pos,
    heading: Direction,
) -> Option<SearchHit> {
    find_nearest(belief.size(), barriers, start, Some(heading), |pos| belief.is_zero(pos))
}

pub fn find_nearest_suspected_hazard(
    hazard: &HazardGrid,
    barriers: &BarrierGraph,
    start: Pos,
) -> Option<SearchHit> {
    find_nearest(hazard.size(), barriers, start, None, |pos| {
        hazard.get(pos) == HazardCell::Possible
    })
}

/// Nearest cell satisfying `is_target`, the start cell included. Expands through
/// in-bounds cells not separated by a known wall. `None` when nothing matches.
pub fn find_nearest<IsTarget>(
    size: usize,
    barriers: &BarrierGraph,
    start: Pos,
    heading: Option<Direction>,
    is_target: IsTarget,
) -> Option<SearchHit>
where
    IsTarget: Fn(Pos) -> bool,
{
    let side = size as i32;
    let in_bounds = |pos: Pos| (0..side).contains(&pos.row) && (0..side).contains(&pos.col);
    if !in_bounds(start) {
        return None;
    }

    let mut visited: BTreeMap<Pos, (u16, Option<Direction>)> = BTreeMap::new();
    let mut queue = VecDeque::new();
    visited.insert(start, (0, None));
    queue.push_back(start);

    let mut best: Option<(SearchHit, bool)> = None;

    while let Some(current) = queue.pop_front() {
        let Some(&(dist, first_step)) = visited.get(&current) else {
            continue;
        };

        if let Some((hit, _)) = best
            && dist > hit.distance
        {
            break;
        }

        if is_target(current) {
            let on_heading = heading.is_some() && first_step == heading;
            match best {
                None => best = Some((SearchHit { pos: current, distance: dist }, on_heading)),
                Some((_, false)) if on_heading => {
                    best = Some((SearchHit { pos: current, distance: dist }, true));
                }
                _ => {}
            }
            if heading.is_none() {
                break;
            }
        }

        for dir in Direction::ALL {
            let next = current.step(dir);
            if !in_bounds(next) || !barriers.can_move(current, next) {
                continue;
            }
            if let Entry::Vacant(entry) = visited.entry(next) {
                entry.insert((dist + 1, first_step.or(Some(dir))));
                queue.push_back(next);
            }
        }
    }

    best.map(|(hit, _)| hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::manhattan;

    fn p(row: i32, col: i32) -> Pos {
        Pos { row, col }
    }

    fn single_zero(size: usize, at: Pos) -> BeliefGrid {
        let mut grid = BeliefGrid::new(size);
        grid.set(at, Some(0));
        grid
    }

    #[test]
    fn single_zero_found_at_manhattan_distance_from_any_start() {
        let zero = p(4, 1);
        let grid = single_zero(6, zero);
        let walls = BarrierGraph::new();
        for start in grid.positions() {
            let hit = find_nearest_zero(&grid, &walls, start).expect("zero should be reachable");
            assert_eq!(hit.pos, zero);
            assert_eq!(u32::from(hit.distance), manhattan(start, zero));
        }
    }

    #[test]
    fn all_unknown_grid_reports_not_found() {
        let grid = BeliefGrid::new(6);
        assert_eq!(find_nearest_zero(&grid, &BarrierGraph::new(), p(0, 0)), None);
    }

    #[test]
    fn out_of_bounds_start_reports_not_found() {
        let grid = single_zero(6, p(0, 0));
        assert_eq!(find_nearest_zero(&grid, &BarrierGraph::new(), p(-1, 0)), None);
    }

    #[test]
    fn known_walls_lengthen_the_route() {
        let grid = single_zero(3, p(0, 1));
        let mut walls = BarrierGraph::new();
        walls.record_blocked(p(0, 0), p(0, 1));
        let hit = find_nearest_zero(&grid, &walls, p(0, 0)).expect("detour exists");
        assert_eq!(hit.distance, 3);
    }

    #[test]
    fn plain_search_takes_first_candidate_in_bfs_order() {
        let mut grid = BeliefGrid::new(5);
        grid.set(p(2, 4), Some(0));
        grid.set(p(0, 2), Some(0));
        let hit = find_nearest_zero(&grid, &BarrierGraph::new(), p(2, 2)).expect("found");
        assert_eq!(hit, SearchHit { pos: p(0, 2), distance: 2 });
    }

    #[test]
    fn heading_breaks_ties_at_equal_depth() {
        let mut grid = BeliefGrid::new(5);
        grid.set(p(2, 4), Some(0));
        grid.set(p(0, 2), Some(0));
        let walls = BarrierGraph::new();

        let hit =
            find_nearest_zero_toward(&grid, &walls, p(2, 2), Direction::Right).expect("found");
        assert_eq!(hit, SearchHit { pos: p(2, 4), distance: 2 });

        let hit =
            find_nearest_zero_toward(&grid, &walls, p(2, 2), Direction::Down).expect("found");
        assert_eq!(hit.pos, p(0, 2), "no candidate on heading falls back to BFS order");
    }

    #[test]
    fn heading_never_prefers_a_farther_candidate() {
        let mut grid = BeliefGrid::new(5);
        grid.set(p(1, 2), Some(0));
        grid.set(p(2, 4), Some(0));
        let hit = find_nearest_zero_toward(&grid, &BarrierGraph::new(), p(2, 2), Direction::Right)
            .expect("found");
        assert_eq!(hit, SearchHit { pos: p(1, 2), distance: 1 });
    }

    #[test]
    fn start_cell_counts_as_a_candidate() {
        let grid = single_zero(4, p(1, 1));
        let hit = find_nearest_zero(&grid, &BarrierGraph::new(), p(1, 1)).expect("found");
        assert_eq!(hit.distance, 0);
    }

    #[test]
    fn hazard_search_matches_possible_cells() {
        let mut hazard = HazardGrid::new(6);
        hazard.observe_hot(p(3, 3));
        let hit = find_nearest_suspected_hazard(&hazard, &BarrierGraph::new(), p(0, 3))
            .expect("possible cell nearby");
        assert_eq!(hit, SearchHit { pos: p(2, 3), distance: 2 });
    }
}
