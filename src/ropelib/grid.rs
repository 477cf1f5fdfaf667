use std::cmp::{max, min};
use std::fmt;

use super::point::Point;

type Index = i64;

/// A rectangular, fully-allocated window onto the (otherwise unbounded) grid.
///
/// Rows are laid out with y pointing up, so rendering starts at `max_y`.
#[derive(Debug)]
pub struct DenseGrid<V: Clone + fmt::Debug> {
    min_x: Index,
    min_y: Index,
    max_x: Index,
    max_y: Index,
    width: usize,
    cells: Vec<V>,
}

impl<V: Clone + fmt::Debug> DenseGrid<V> {
    pub fn new_with(corner: Point<Index>, opposite: Point<Index>, empty_value: V) -> Self {
        let min_x = min(corner.x, opposite.x);
        let max_x = max(corner.x, opposite.x);
        let min_y = min(corner.y, opposite.y);
        let max_y = max(corner.y, opposite.y);
        let width = 1 + max_x.abs_diff(min_x) as usize;
        let height = 1 + max_y.abs_diff(min_y) as usize;
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width,
            cells: vec![empty_value; width * height],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Set a value by coordinate. Returns None if the coordinate is out-of-bounds.
    pub fn set(&mut self, coordinate: Point<Index>, value: V) -> Option<()> {
        let index = self.index_for(coordinate)?;
        self.cells[index] = value;
        Some(())
    }

    /// One line per row, top row first, each terminated by a newline.
    pub fn render_with<F: Fn(&V) -> char>(&self, f: F) -> String {
        let mut out = String::with_capacity((self.width + 1) * (self.size() / self.width));
        for y in (self.min_y..=self.max_y).rev() {
            let row = y.abs_diff(self.min_y) as usize * self.width;
            out.extend(self.cells[row..row + self.width].iter().map(&f));
            out.push('\n');
        }
        out
    }

    fn index_for(&self, coordinate: Point<Index>) -> Option<usize> {
        if coordinate.x < self.min_x
            || coordinate.x > self.max_x
            || coordinate.y < self.min_y
            || coordinate.y > self.max_y
        {
            None
        } else {
            let row = coordinate.y.abs_diff(self.min_y) as usize * self.width;
            let col = coordinate.x.abs_diff(self.min_x) as usize;
            Some(row + col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DenseGrid, Point};

    #[test]
    fn test_small() {
        let origin = Point { x: 10, y: 10 };
        let mut g = DenseGrid::new_with(origin, origin, '.');
        assert_eq!(g.size(), 1);
        assert_eq!(g.set(Point { x: 0, y: 0 }, 'x'), None);
        assert_eq!(g.set(Point { x: 11, y: 10 }, 'x'), None);
        assert_eq!(g.render_with(|c| *c), ".\n");
        assert_eq!(g.set(origin, 'x'), Some(()));
        assert_eq!(g.render_with(|c| *c), "x\n");
    }

    #[test]
    fn test_negative_corners() {
        let mut g = DenseGrid::new_with(Point { x: 2, y: 1 }, Point { x: -2, y: -1 }, '.');
        assert_eq!(g.size(), 15);
        assert_eq!(g.set(Point { x: -2, y: -1 }, 'a'), Some(()));
        assert_eq!(g.set(Point { x: 3, y: 0 }, 'b'), None);
        assert_eq!(g.render_with(|c| *c), ".....\n.....\na....\n");
    }

    #[test]
    fn test_render_top_row_first() {
        let mut g = DenseGrid::new_with(Point { x: 0, y: 0 }, Point { x: 2, y: 1 }, '.');
        g.set(Point { x: 0, y: 0 }, 'a');
        g.set(Point { x: 2, y: 1 }, 'b');
        assert_eq!(g.render_with(|c| *c), "..b\na..\n");
    }
}
