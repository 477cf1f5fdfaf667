use std::collections::HashSet;

use itertools::{Itertools, MinMaxResult};

use super::command::{Command, Direction};
use super::grid::DenseGrid;
use super::point::Point;

/// Largest bounding box, in cells, that `trail_map` will draw.
pub const MAX_TRAIL_CELLS: u64 = 1 << 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrailCell {
    Untouched,
    Start,
    Visited,
}

impl TrailCell {
    fn as_char(&self) -> char {
        match self {
            TrailCell::Untouched => '.',
            TrailCell::Start => 's',
            TrailCell::Visited => '#',
        }
    }
}

/// A two-knot rope. The head is driven by commands and the tail is dragged
/// along behind it; every cell the tail has been in is remembered.
#[derive(Debug, Clone)]
pub struct Rope {
    head: Point,
    tail: Point,
    visited: HashSet<Point>,
}

impl Rope {
    pub fn new() -> Self {
        let start = Point::origin();
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            head: start,
            tail: start,
            visited,
        }
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn tail(&self) -> Point {
        self.tail
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn visited(&self) -> impl Iterator<Item = &Point> + '_ {
        self.visited.iter()
    }

    /// Move the head one cell and let the tail catch up. Returns whether the
    /// tail moved.
    ///
    /// Once the tail is out of reach (squared distance above 2) it is placed
    /// directly behind the head along the axis the head just moved on. This
    /// only holds because the head never moves diagonally.
    pub fn step(&mut self, direction: Direction) -> bool {
        let unit = direction.unit();
        self.head = self.head + unit;
        if self.tail.distance_squared_to(self.head) <= 2 {
            return false;
        }
        self.tail = self.head - unit;
        self.visited.insert(self.tail);
        true
    }

    pub fn apply(&mut self, command: &Command) {
        let mut moved = 0;
        for direction in command.steps() {
            if self.step(direction) {
                moved += 1;
            }
        }
        log::debug!(
            "{} {}: head at {}, tail at {} (tail moved {} times, {} cells visited)",
            command.direction,
            command.count,
            self.head,
            self.tail,
            moved,
            self.visited.len()
        );
    }

    /// Draws every visited cell over the bounding box of the tail's trail,
    /// with `s` marking the start and `#` the rest. Fails rather than
    /// allocating when the box holds more than `MAX_TRAIL_CELLS` cells.
    pub fn trail_map(&self) -> anyhow::Result<String> {
        let (min_x, max_x) = match self.visited.iter().map(|p| p.x).minmax() {
            MinMaxResult::MinMax(a, b) => (a, b),
            MinMaxResult::OneElement(a) => (a, a),
            MinMaxResult::NoElements => unreachable!("the start cell is always visited"),
        };
        let (min_y, max_y) = match self.visited.iter().map(|p| p.y).minmax() {
            MinMaxResult::MinMax(a, b) => (a, b),
            MinMaxResult::OneElement(a) => (a, a),
            MinMaxResult::NoElements => unreachable!("the start cell is always visited"),
        };
        let width = max_x.abs_diff(min_x) + 1;
        let height = max_y.abs_diff(min_y) + 1;
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_TRAIL_CELLS => {}
            _ => anyhow::bail!(
                "trail spans {}x{} cells, more than the {} that can be drawn",
                width,
                height,
                MAX_TRAIL_CELLS
            ),
        }
        let mut grid = DenseGrid::new_with(
            Point::new(min_x, min_y),
            Point::new(max_x, max_y),
            TrailCell::Untouched,
        );
        for point in self.visited.iter() {
            grid.set(*point, TrailCell::Visited);
        }
        grid.set(Point::origin(), TrailCell::Start);
        Ok(grid.render_with(TrailCell::as_char))
    }
}

/// Runs a fresh rope through `commands` and counts the cells its tail visited.
pub fn process(commands: &[Command]) -> usize {
    let mut rope = Rope::new();
    for command in commands {
        rope.apply(command);
    }
    rope.visited_count()
}
