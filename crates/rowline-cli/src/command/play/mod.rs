use std::path::PathBuf;

use rand::Rng as _;
use rowline_engine::{GameKind, GameSeed};
use tracing::info;

use crate::{
    command::{new_controller, play::app::PlayApp},
    config::SettingsArg,
    logging,
    tui::Runtime,
};

mod app;

/// Timer resolution of the interactive game.
const TICK_RATE: f64 = 30.0;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Game to play: gomoku or tic-tac-toe
    #[clap(default_value_t)]
    pub(super) game: GameKind,
    #[clap(flatten)]
    pub(super) settings: SettingsArg,
    /// File to write logs to while the board occupies the terminal
    #[clap(long)]
    pub(super) log_file: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        game,
        settings,
        log_file,
    } = arg;

    let settings = settings.resolve()?;
    let log_file = log_file
        .clone()
        .or_else(|| settings.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(logging::DEFAULT_LOG_FILE));
    logging::init_file(&log_file)?;

    let seed: GameSeed = settings.seed.unwrap_or_else(|| rand::rng().random());
    info!(%game, %seed, difficulty = %settings.difficulty, "starting interactive game");

    let mut app = PlayApp::new(*game, new_controller(*game, &settings, seed));
    Runtime::new(TICK_RATE).run(&mut app)?;
    Ok(())
}
