use std::fmt;

use bevy::math::{ivec2, uvec2, IVec2, UVec2};

use crate::{
    cell::{Cell, Direction, Neighbours},
    error::{LifeError, Result},
    prelude::{ALIVE_GLYPH, DEAD_GLYPH},
};

/// Fixed-size grid that owns every [`Cell`] and advances them one generation at a time.
///
/// Cells live in a flat row-major buffer; neighbour links are indices into that buffer,
/// so the universe stays the only owner. Every cell is wired before `new` returns.
#[derive(Debug, Clone)]
pub struct Universe {
    /// amount of cells on each axis
    size: UVec2,
    cells: Vec<Cell>,
    /// frozen states of the previous generation, reused between ticks
    prior: Vec<bool>,
    generation: u64,
}

impl Universe {
    /// largest cell count a universe may hold, keeps every coordinate within `i32`
    pub const MAX_CELLS: usize = 1 << 24;

    /// Checks `width` and `height` without allocating anything.
    pub fn check_dimensions(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= Self::MAX_CELLS)
            .ok_or(LifeError::TooLarge {
                width,
                height,
                max: Self::MAX_CELLS,
            })
    }

    /// Allocates `width * height` dead cells, then wires each one to its in-bounds
    /// west/east/north/south neighbours.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::check_dimensions(width, height)?;

        let mut universe = Self {
            size: uvec2(width, height),
            cells: vec![Cell::dead(); len],
            prior: vec![false; len],
            generation: 0,
        };
        universe.wire()?;
        Ok(universe)
    }

    // second phase: every cell exists, so every link has a target
    fn wire(&mut self) -> Result<()> {
        let links = (0..self.cells.len())
            .map(|idx| self.neighbour_indices(self.idx_to_cell_coord(idx)))
            .collect::<Vec<_>>();

        for (cell, links) in self.cells.iter_mut().zip(links) {
            cell.connect(links)?;
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// number of ticks applied since construction
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn contains(&self, cell_coord: IVec2) -> bool {
        cell_coord.x >= 0
            && cell_coord.y >= 0
            && (cell_coord.x as u32) < self.size.x
            && (cell_coord.y as u32) < self.size.y
    }

    #[inline]
    fn cell_coord_to_idx(&self, cell_coord: IVec2) -> Option<usize> {
        self.contains(cell_coord)
            .then(|| cell_coord.y as usize * self.size.x as usize + cell_coord.x as usize)
    }

    #[inline]
    fn idx_to_cell_coord(&self, idx: usize) -> IVec2 {
        let width = self.size.x as usize;
        ivec2((idx % width) as i32, (idx / width) as i32)
    }

    fn index_of(&self, cell_coord: IVec2) -> Result<usize> {
        self.cell_coord_to_idx(cell_coord)
            .ok_or(LifeError::OutOfBounds {
                x: cell_coord.x,
                y: cell_coord.y,
                width: self.size.x,
                height: self.size.y,
            })
    }

    #[inline]
    fn neighbour_indices(&self, cell_coord: IVec2) -> Neighbours {
        Neighbours::new(
            Direction::ALL.map(|dir| self.cell_coord_to_idx(cell_coord + dir.offset())),
        )
    }

    pub fn cell(&self, cell_coord: IVec2) -> Result<&Cell> {
        let idx = self.index_of(cell_coord)?;
        Ok(&self.cells[idx])
    }

    pub fn is_alive(&self, cell_coord: IVec2) -> Result<bool> {
        self.cell(cell_coord).map(Cell::is_alive)
    }

    /// Wired neighbour coordinates of a cell in west, east, north, south order.
    pub fn neighbours(&self, cell_coord: IVec2) -> Result<[Option<IVec2>; 4]> {
        let idx = self.index_of(cell_coord)?;
        let mut result = [None; 4];
        if let Some(links) = self.cells[idx].neighbours() {
            for (i, (_, link)) in links.iter().enumerate() {
                result[i] = link.map(|n| self.idx_to_cell_coord(n));
            }
        }
        Ok(result)
    }

    /// Seeds live cells. An empty slice brings the whole grid to life; otherwise only the
    /// given cells are set alive and every other cell keeps its state.
    ///
    /// All coordinates are checked before anything changes, so an out-of-bounds entry
    /// leaves the universe untouched.
    pub fn populate(&mut self, cell_coords: &[IVec2]) -> Result<()> {
        if cell_coords.is_empty() {
            self.cells.iter_mut().for_each(|cell| cell.set_alive(true));
            return Ok(());
        }

        let indices = cell_coords
            .iter()
            .map(|&coord| self.index_of(coord))
            .collect::<Result<Vec<_>>>()?;
        for idx in indices {
            self.cells[idx].set_alive(true);
        }
        Ok(())
    }

    /// kill every cell, wiring and generation count are kept
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_alive(false));
    }

    /// Advances exactly one generation. The previous states are frozen first, then every
    /// cell commits its next state from that snapshot, so update order does not matter.
    pub fn tick(&mut self) {
        for (slot, cell) in self.prior.iter_mut().zip(&self.cells) {
            *slot = cell.is_alive();
        }
        for cell in self.cells.iter_mut() {
            cell.tick(&self.prior);
        }
        self.generation += 1;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// live cell coordinates in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| self.idx_to_cell_coord(idx))
    }

    /// One line per row, one glyph per cell, each line ending in `\n`.
    pub fn render(&self) -> String {
        let width = self.size.x as usize;
        let mut out = String::with_capacity((width + 1) * self.size.y as usize);
        for row in self.cells.chunks(width) {
            out.extend(row.iter().map(|cell| {
                if cell.is_alive() {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                }
            }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
