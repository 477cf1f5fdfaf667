use std::fmt;

pub trait DimVal:
    num_traits::Signed
    + num_traits::ToPrimitive
    + std::cmp::Ord
    + std::cmp::Eq
    + std::hash::Hash
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<
        S: num_traits::Signed
            + num_traits::ToPrimitive
            + std::cmp::Ord
            + std::cmp::Eq
            + std::hash::Hash
            + Clone
            + Copy
            + std::fmt::Display
            + std::fmt::Debug,
    > DimVal for S
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point<I: DimVal = i64> {
    pub x: I,
    pub y: I,
}

impl<I: DimVal> Point<I> {
    pub fn new(x: I, y: I) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        Point {
            x: I::zero(),
            y: I::zero(),
        }
    }

    /// Squared euclidean distance; stays in integers so adjacency checks
    /// don't need a square root.
    pub fn distance_squared_to(&self, other: Point<I>) -> I {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl<I: DimVal> fmt::Display for Point<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<I: DimVal> std::ops::Add for Point<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<I: DimVal> std::ops::Sub for Point<I> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
