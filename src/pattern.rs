use bevy::math::{ivec2, IVec2, UVec2};

use crate::{
    error::{LifeError, Result},
    universe::Universe,
};

/// Initial live-cell sets the driver can seed a universe with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Pattern {
    /// every cell alive
    Full,
    /// three cells in a horizontal line
    Row,
    /// 2x2 block, stays put
    Block,
    /// diagonal pair that flips to the other diagonal every generation
    Flicker,
    /// plus sign of five cells
    Cross,
    /// each cell alive with the configured density
    #[default]
    Random,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Full => "full",
            Pattern::Row => "row",
            Pattern::Block => "block",
            Pattern::Flicker => "flicker",
            Pattern::Cross => "cross",
            Pattern::Random => "random",
        }
    }

    /// offsets from the grid centre
    fn shape(&self) -> &'static [IVec2] {
        const ROW: [IVec2; 3] = [IVec2::new(-1, 0), IVec2::new(0, 0), IVec2::new(1, 0)];
        const BLOCK: [IVec2; 4] = [
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(0, 1),
            IVec2::new(1, 1),
        ];
        const FLICKER: [IVec2; 2] = [IVec2::new(0, -1), IVec2::new(-1, 0)];
        const CROSS: [IVec2; 5] = [
            IVec2::new(0, -1),
            IVec2::new(-1, 0),
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            IVec2::new(0, 1),
        ];

        match self {
            Pattern::Row => &ROW,
            Pattern::Block => &BLOCK,
            Pattern::Flicker => &FLICKER,
            Pattern::Cross => &CROSS,
            Pattern::Full | Pattern::Random => &[],
        }
    }

    /// Cells this pattern sets alive on a grid of `size`.
    ///
    /// `Full` yields the empty set, which [`Universe::populate`] reads as "every cell".
    pub fn cells(
        &self,
        size: UVec2,
        density: f32,
        rng: &mut fastrand::Rng,
    ) -> Result<Vec<IVec2>> {
        if let Pattern::Random = self {
            if !(0.0..=1.0).contains(&density) {
                return Err(LifeError::InvalidDensity(density));
            }
            let (w, h) = (size.x as i32, size.y as i32);
            return Ok((0..h)
                .flat_map(|y| (0..w).map(move |x| ivec2(x, y)))
                .filter(|_| rng.f32() < density)
                .collect());
        }

        let center = (size / 2).as_ivec2();
        let cells = self
            .shape()
            .iter()
            .map(|offset| center + *offset)
            .collect::<Vec<_>>();

        let fits = cells
            .iter()
            .all(|c| c.x >= 0 && c.y >= 0 && c.x < size.x as i32 && c.y < size.y as i32);
        if !fits {
            return Err(LifeError::PatternDoesNotFit {
                pattern: self.name(),
                width: size.x,
                height: size.y,
            });
        }
        Ok(cells)
    }

    /// Seeds `universe` and returns its population afterwards.
    ///
    /// A random draw that comes up empty leaves the grid dead instead of filling it.
    pub fn seed(
        &self,
        universe: &mut Universe,
        density: f32,
        rng: &mut fastrand::Rng,
    ) -> Result<usize> {
        let cells = self.cells(universe.size(), density, rng)?;
        if !cells.is_empty() || *self == Pattern::Full {
            universe.populate(&cells)?;
        }
        Ok(universe.population())
    }
}
