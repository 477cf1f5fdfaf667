mod command;
mod grid;
mod point;
mod rope;

pub use command::{parse_commands, Command, Direction};
pub use point::Point;
pub use rope::{process, Rope, MAX_TRAIL_CELLS};
