use bevy::prelude::*;

/// Driver phases: build the board, seed it, advance it, stop.
#[derive(States, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Load,
    Setup,
    Running,
    /// generation limit reached
    Halted,
}
