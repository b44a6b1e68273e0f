use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// Grid coordinate. Row grows downwards, column grows to the right.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self { row: self.row + dr, col: self.col + dc }
    }

    /// Neighbors in `Direction::ALL` order. May fall outside the grid.
    pub fn neighbors(self) -> [Pos; 4] {
        Direction::ALL.map(|dir| self.step(dir))
    }

    pub fn shares_line_with(self, other: Pos) -> bool {
        self.row == other.row || self.col == other.col
    }
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate evaluation order. Ties in scoring resolve to the earliest entry.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`, if they are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        Direction::ALL.into_iter().find(|dir| from.step(*dir) == to)
    }

    pub fn label(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionPhase {
    Searching,
    ReturningHome,
}

/// Scoring mode used while searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    TargetRace,
    HazardLure,
}

/// Which hidden entity a proxy reading refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Probe {
    Target,
    Hazard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    ReturnedHome,
    AdversaryTrapped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LossCause {
    Caught,
    Hazard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStatus {
    Continue,
    Won(WinReason),
    Lost(LossCause),
    NoMove,
}

impl TurnStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnStatus::Continue)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    Finished(TurnStatus),
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceResult {
    pub simulated_turns: u32,
    pub stop_reason: AdvanceStopReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    GridTooSmall { size: usize },
    GridTooLarge { size: usize, max: usize },
    OutOfBounds { what: &'static str, pos: Pos },
    SharedStart { pos: Pos },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size } => write!(f, "grid side {size} is smaller than 2"),
            Self::GridTooLarge { size, max } => {
                write!(f, "grid side {size} exceeds the maximum of {max}")
            }
            Self::OutOfBounds { what, pos } => {
                write!(f, "{what} ({}, {}) lies outside the grid", pos.row, pos.col)
            }
            Self::SharedStart { pos } => {
                write!(f, "agent and adversary both start at ({}, {})", pos.row, pos.col)
            }
        }
    }
}

impl error::Error for GameError {}

/// Everything the engine reports. Also kept in the in-engine log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    TargetObserved { at: Pos, reading: u32, candidates: usize },
    TargetResolved { at: Pos },
    BeliefReset { at: Pos, reading: u32 },
    HazardSignal { at: Pos, hot: bool },
    HazardResolved { at: Pos },
    HazardEntered { at: Pos },
    BarrierDiscovered { from: Pos, to: Pos },
    Moved { direction: Direction, to: Pos, score: i32 },
    StrategySwitched { to: Strategy },
    TargetCollected { at: Pos },
    AdversaryMoved { to: Pos },
    TurnSkipped,
    Paused,
    Resumed,
    NoValidMove,
    Won(WinReason),
    Lost(LossCause),
}
