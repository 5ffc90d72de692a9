pub mod beam;
pub mod error;
pub mod grid;
pub mod optimizer;
pub mod part1;
pub mod part2;
pub mod simulator;
pub mod transition;

pub use beam::{BeamState, Direction, Position};
pub use error::{Error, Malformation};
pub use grid::{Grid, TileKind};
pub use optimizer::{boundary_entries, BestEntry, Optimizer, Strategy};
pub use simulator::{Energized, Simulator};
pub use transition::Outgoing;
