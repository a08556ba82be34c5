use std::time::Duration;

use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*, state::app::StatesPlugin};
use clap::{error::ErrorKind, CommandFactory, Parser};
use conway_gol_term::{
    config::{Args, LifeConfig},
    life::LifePlugin,
    prelude::RUNNER_WAIT_MS,
    state::GameState,
};

fn main() -> AppExit {
    let config = LifeConfig::from(Args::parse());
    if let Err(err) = config.validate() {
        Args::command()
            .error(ErrorKind::ValueValidation, err)
            .exit();
    }

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(
                RUNNER_WAIT_MS,
            ))),
        )
        .add_plugins((StatesPlugin, LogPlugin::default()))
        .init_state::<GameState>()
        .add_plugins(LifePlugin::new(config))
        .run()
}
