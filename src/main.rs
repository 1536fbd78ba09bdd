//! Space Shooter entry point
//!
//! Resolves configuration and runs the game on the headless autopilot
//! platform. Windowed front ends plug in through `platform::Platform`.

use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use space_shooter::platform::headless::{HeadlessOptions, HeadlessPlatform};
use space_shooter::platform::{self, FrameClock};
use space_shooter::{ConfigError, Game, GameConfig};

#[derive(Parser)]
#[command(name = "space-shooter")]
#[command(about = "Fixed-tick arcade space shooter (headless autopilot)")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for the first run (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of runs to play before quitting
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Stop after this many frames in total (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max_frames: u64,

    /// Pace frames at the configured tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Write every frame to stdout as a JSON line
    #[arg(long)]
    snapshots: bool,
}

fn resolve_config(path: Option<&PathBuf>) -> Result<GameConfig, ConfigError> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_env();
    config.validate()?;
    Ok(config)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match resolve_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!(
        "Space Shooter starting: {}x{} world, {} enemy variant(s), seed {}",
        config.width,
        config.height,
        config.enemy_variants(),
        seed
    );

    let options = HeadlessOptions {
        runs: args.runs.max(1),
        max_frames: args.max_frames,
        emit_snapshots: args.snapshots,
    };
    let stdout = BufWriter::new(std::io::stdout().lock());
    let mut platform = HeadlessPlatform::new(options, config.width, stdout);
    let mut clock = FrameClock::from_config(&config, args.realtime);
    let mut game = Game::new(config, seed);

    let report = platform::run(&mut platform, &mut game, &mut clock);

    log::info!(
        "Played {} run(s) over {} frames, best score {}",
        report.runs.len(),
        report.frames,
        report.best_score()
    );
    ExitCode::SUCCESS
}
