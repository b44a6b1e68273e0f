pub mod environment;
pub mod game;
pub mod rules;
pub mod state;
pub mod types;
pub mod world;

pub use environment::Environment;
pub use game::Game;
pub use rules::{HazardEntry, MAX_GRID_SIZE, RaceRule, Rules};
pub use state::{GameState, Snapshot};
pub use types::*;
pub use world::SimWorld;
