use std::num::NonZeroU64;
use std::str::FromStr;

use derive_more::Display;
use nom::{
    bytes::complete::tag,
    character::{self, complete::one_of},
    combinator::map_res,
    sequence::separated_pair,
    IResult,
};

use super::point::Point;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The one-cell offset a knot travels when moved in this direction.
    pub fn unit(&self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            _ => anyhow::bail!("invalid direction {:?}", c),
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Command {
    pub direction: Direction,
    pub count: NonZeroU64,
}

impl Command {
    pub fn new(direction: Direction, count: NonZeroU64) -> Self {
        Self { direction, count }
    }

    /// Expands the command into its unit steps.
    pub fn steps(&self) -> impl Iterator<Item = Direction> {
        let direction = self.direction;
        (0..self.count.get()).map(move |_| direction)
    }
}

fn parse_command(s: &str) -> IResult<&str, Command> {
    let (rest, (direction, count)) = separated_pair(
        map_res(one_of("UDLR"), |c: char| Direction::try_from(c)),
        tag(" "),
        map_res(character::complete::u64, |n: u64| NonZeroU64::try_from(n)),
    )(s)?;
    Ok((rest, Command { direction, count }))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (remaining, command) =
            parse_command(s.trim_end()).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if !remaining.is_empty() {
            anyhow::bail!("unhandled input {:?}", remaining);
        }
        Ok(command)
    }
}

/// Parses one command per line. Blank lines are skipped; any other line that
/// doesn't parse fails the whole input.
pub fn parse_commands(s: &str) -> anyhow::Result<Vec<Command>> {
    s.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Command>()
                .map_err(|e| anyhow::anyhow!("error parsing line {}: {}", i + 1, e))
        })
        .collect()
}
