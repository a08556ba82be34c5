use std::io::{self, Write};

use bevy::prelude::*;

use crate::{config::LifeConfig, error::LifeError, state::GameState, universe::Universe};

/// Drives a [`Universe`] on the fixed timestep and draws every generation to stdout.
pub struct LifePlugin {
    config: LifeConfig,
}

impl LifePlugin {
    pub fn new(config: LifeConfig) -> Self {
        Self { config }
    }
}

impl Default for LifePlugin {
    fn default() -> Self {
        Self::new(LifeConfig::default())
    }
}

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<FrameOutput>()
            .insert_resource(Time::<Fixed>::from_duration(self.config.interval))
            .add_systems(OnEnter(GameState::Load), load_board)
            .add_systems(OnEnter(GameState::Setup), seed_board)
            .add_systems(
                FixedUpdate,
                (draw_generation, advance_generation)
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(OnEnter(GameState::Halted), halt);
    }
}

// ——> SYSTEMS

/// build the universe and hand it over as the board resource
fn load_board(
    mut commands: Commands,
    config: Res<LifeConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    match Universe::new(config.size.x, config.size.y) {
        Ok(universe) => {
            info!(
                "created {}x{} board, pattern `{}`",
                universe.width(),
                universe.height(),
                config.pattern.name()
            );
            commands.insert_resource(Board(universe));
            next_state.set(GameState::Setup);
        }
        Err(err) => fail(&mut exit, err),
    }
}

fn seed_board(
    mut board: ResMut<Board>,
    config: Res<LifeConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let mut rng = config
        .seed
        .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

    match config.pattern.seed(&mut board.0, config.density, &mut rng) {
        Ok(population) => {
            info!("seeded {population} live cells");
            next_state.set(GameState::Running);
        }
        Err(err) => fail(&mut exit, err),
    }
}

/// draw the current generation, a closed output (e.g. `| head`) ends the run
fn draw_generation(
    board: Res<Board>,
    config: Res<LifeConfig>,
    mut output: ResMut<FrameOutput>,
    mut exit: EventWriter<AppExit>,
) {
    match write_frame(&mut output.0, &board.0, config.clear_screen) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            info!("output closed at generation {}, stopping", board.generation());
            exit.send(AppExit::Success);
        }
        Err(err) => fail(&mut exit, LifeError::Output(err.to_string())),
    }
}

/// tick once, or halt when the generation limit is reached
fn advance_generation(
    mut board: ResMut<Board>,
    config: Res<LifeConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if config
        .generations
        .is_some_and(|limit| board.generation() >= limit)
    {
        next_state.set(GameState::Halted);
        return;
    }
    board.tick();
    debug!(
        "generation {}: {} alive",
        board.generation(),
        board.population()
    );
}

fn halt(board: Res<Board>, mut exit: EventWriter<AppExit>) {
    info!(
        "stopped after {} generations, {} alive",
        board.generation(),
        board.population()
    );
    exit.send(AppExit::Success);
}

fn fail(exit: &mut EventWriter<AppExit>, err: LifeError) {
    error!("{err}");
    exit.send(AppExit::error());
}

/// Writes a header line and the rendered grid, optionally clearing the terminal first.
pub fn write_frame(
    out: &mut impl Write,
    universe: &Universe,
    clear_screen: bool,
) -> io::Result<()> {
    if clear_screen {
        // erase display, cursor home
        out.write_all(b"\x1b[2J\x1b[H")?;
    }
    writeln!(
        out,
        "generation {} | population {}",
        universe.generation(),
        universe.population()
    )?;
    out.write_all(universe.render().as_bytes())?;
    out.flush()
}

// ——> RESOURCES

/// the simulated universe
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct Board(pub Universe);

/// where frames are written, stdout unless replaced
#[derive(Resource)]
pub struct FrameOutput(pub Box<dyn Write + Send + Sync>);

impl Default for FrameOutput {
    fn default() -> Self {
        Self(Box::new(io::stdout()))
    }
}
