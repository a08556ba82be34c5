use std::time::Duration;

use bevy::{
    math::{uvec2, UVec2},
    prelude::Resource,
};
use clap::Parser;

use crate::{
    error::{LifeError, Result},
    pattern::Pattern,
    prelude::*,
    universe::Universe,
};

/// Terminal Game of Life on a four-neighbour grid.
#[derive(Parser, Debug, Clone)]
#[command(name = "conway-gol-term", version, about)]
pub struct Args {
    /// cells per row
    #[arg(long, env = "GOL_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: u32,

    /// number of rows
    #[arg(long, env = "GOL_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: u32,

    /// initial live-cell pattern
    #[arg(short, long, env = "GOL_PATTERN", value_enum, default_value_t = Pattern::default())]
    pub pattern: Pattern,

    /// delay between generations in milliseconds
    #[arg(long, env = "GOL_INTERVAL_MS", default_value_t = UPDATE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// stop after this many generations, runs forever if omitted
    #[arg(short = 'n', long, env = "GOL_GENERATIONS")]
    pub generations: Option<u64>,

    /// share of live cells for the random pattern
    #[arg(long, env = "GOL_DENSITY", default_value_t = DEFAULT_DENSITY)]
    pub density: f32,

    /// seed for the random pattern
    #[arg(long, env = "GOL_SEED")]
    pub seed: Option<u64>,

    /// append frames instead of redrawing in place
    #[arg(long)]
    pub no_clear: bool,
}

/// Runtime settings of the driver.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LifeConfig {
    /// the amount of cells on each axis
    pub size: UVec2,
    pub pattern: Pattern,
    /// delay between two generations
    pub interval: Duration,
    pub generations: Option<u64>,
    pub density: f32,
    pub seed: Option<u64>,
    pub clear_screen: bool,
}

impl LifeConfig {
    /// Rejects settings the engine or the fixed timestep cannot run with.
    pub fn validate(&self) -> Result<()> {
        Universe::check_dimensions(self.size.x, self.size.y)?;
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        if self.interval.is_zero() {
            return Err(LifeError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: uvec2(BOARD_WIDTH, BOARD_HEIGHT),
            pattern: Pattern::default(),
            interval: Duration::from_millis(UPDATE_INTERVAL_MS),
            generations: None,
            density: DEFAULT_DENSITY,
            seed: None,
            clear_screen: true,
        }
    }
}

impl From<Args> for LifeConfig {
    fn from(args: Args) -> Self {
        Self {
            size: uvec2(args.width, args.height),
            pattern: args.pattern,
            interval: Duration::from_millis(args.interval_ms),
            generations: args.generations,
            density: args.density,
            seed: args.seed,
            clear_screen: !args.no_clear,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_prelude() {
        let config = LifeConfig::from(Args::try_parse_from(["gol"]).unwrap());
        assert_eq!(LifeConfig::default(), config);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn flags_are_parsed() {
        let args = Args::try_parse_from([
            "gol",
            "--width",
            "3",
            "--height",
            "4",
            "-p",
            "flicker",
            "--interval-ms",
            "50",
            "-n",
            "10",
            "--seed",
            "9",
            "--no-clear",
        ])
        .unwrap();
        let config = LifeConfig::from(args);
        assert_eq!(uvec2(3, 4), config.size);
        assert_eq!(Pattern::Flicker, config.pattern);
        assert_eq!(Duration::from_millis(50), config.interval);
        assert_eq!(Some(10), config.generations);
        assert_eq!(Some(9), config.seed);
        assert!(!config.clear_screen);
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        assert!(Args::try_parse_from(["gol", "--pattern", "glider"]).is_err());
    }

    #[test]
    fn validation() {
        let zero = LifeConfig {
            size: uvec2(0, 5),
            ..Default::default()
        };
        assert_eq!(
            Err(LifeError::InvalidDimensions {
                width: 0,
                height: 5
            }),
            zero.validate()
        );

        let huge = LifeConfig {
            size: uvec2(100_000, 100_000),
            ..Default::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(LifeError::TooLarge {
                width: 100_000,
                height: 100_000,
                ..
            })
        ));

        let dense = LifeConfig {
            density: -0.1,
            ..Default::default()
        };
        assert_eq!(Err(LifeError::InvalidDensity(-0.1)), dense.validate());

        let instant = LifeConfig {
            interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(Err(LifeError::ZeroInterval), instant.validate());
    }
}
