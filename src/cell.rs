use bevy::math::{ivec2, IVec2};

use crate::error::{LifeError, Result};

/// One of the four orthogonal directions a cell is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// wiring order of a cell's neighbour slots
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// offset to the neighbour in this direction, `y` grows downwards (row order)
    #[inline]
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::West => ivec2(-1, 0),
            Direction::East => ivec2(1, 0),
            Direction::North => ivec2(0, -1),
            Direction::South => ivec2(0, 1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Non-owning neighbour links, stored as flat indices into the universe's cell buffer.
/// `None` marks a direction that falls off the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbours([Option<usize>; 4]);

impl Neighbours {
    pub fn new(links: [Option<usize>; 4]) -> Self {
        Self(links)
    }

    #[inline]
    pub fn get(&self, direction: Direction) -> Option<usize> {
        self.0[direction.slot()]
    }

    /// number of links that point at a cell
    pub fn present(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<usize>)> + '_ {
        Direction::ALL.into_iter().zip(self.0.iter().copied())
    }
}

/// A single grid position.
///
/// Cells are owned by [`Universe`](crate::universe::Universe) and only ever see their
/// neighbours through a frozen snapshot of the previous generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    neighbours: Option<Neighbours>,
}

impl Cell {
    pub(crate) fn dead() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// wired neighbours, `None` until [`Cell::connect`] ran
    pub fn neighbours(&self) -> Option<&Neighbours> {
        self.neighbours.as_ref()
    }

    /// Wires this cell to its neighbours. Reconnecting with the same links is a no-op,
    /// anything else is rejected so the wiring never changes once set.
    pub(crate) fn connect(&mut self, neighbours: Neighbours) -> Result<()> {
        match self.neighbours {
            None => {
                self.neighbours = Some(neighbours);
                Ok(())
            }
            Some(current) if current == neighbours => Ok(()),
            Some(_) => Err(LifeError::AlreadyConnected),
        }
    }

    /// Counts live neighbours in `prior`. Missing links, and an unwired cell, count as dead.
    pub fn live_neighbours(&self, prior: &[bool]) -> u8 {
        self.neighbours
            .iter()
            .flat_map(|n| n.0.iter().flatten())
            .filter(|&&idx| {
                debug_assert!(
                    idx < prior.len(),
                    "neighbour {idx} outside the snapshot of {} cells",
                    prior.len()
                );
                prior.get(idx).copied().unwrap_or(false)
            })
            .count() as u8
    }

    /// Commits the next state computed from the previous generation `prior` and returns it.
    /// Reads neighbours only; the cell's own prior state does not enter the rule.
    pub fn tick(&mut self, prior: &[bool]) -> bool {
        self.alive = next_state(self.live_neighbours(prior));
        self.alive
    }
}

/// Survival and birth share one threshold: exactly 2 or 3 live neighbours.
#[inline]
pub fn next_state(live_neighbours: u8) -> bool {
    matches!(live_neighbours, 2 | 3)
}
