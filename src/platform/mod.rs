//! Platform abstraction layer
//!
//! Handles everything outside the simulation:
//! - Input sampling (one `TickInput` per frame)
//! - Rendering snapshots
//! - The game-over screen
//! - Frame pacing

pub mod headless;

use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::game::{Game, RunSummary, Step};
use crate::sim::{GamePhase, Snapshot, TickInput};

/// Input source and presentation surface for a session
pub trait Platform {
    /// Sample input for the next tick. `None` means the window was closed.
    fn poll_input(&mut self, phase: GamePhase) -> Option<TickInput>;

    /// Draw one frame
    fn render(&mut self, snapshot: &Snapshot);

    /// Show the final score and the replay/quit prompt
    fn show_game_over(&mut self, summary: &RunSummary);
}

/// Fixed-rate frame pacing
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    realtime: bool,
    frame_start: Option<Instant>,
}

impl FrameClock {
    /// `realtime = false` runs frames back to back (tests, batch runs)
    pub fn new(tick_rate: u32, realtime: bool) -> Self {
        Self::with_frame_secs(1.0 / tick_rate.max(1) as f64, realtime)
    }

    /// Clock ticking at the configured simulation rate
    pub fn from_config(config: &GameConfig, realtime: bool) -> Self {
        Self::with_frame_secs(config.tick_secs(), realtime)
    }

    fn with_frame_secs(secs: f64, realtime: bool) -> Self {
        Self {
            frame: Duration::from_secs_f64(secs),
            realtime,
            frame_start: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn begin_frame(&mut self) {
        if self.realtime {
            self.frame_start = Some(Instant::now());
        }
    }

    /// Sleep away what is left of the frame budget
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            let elapsed = start.elapsed();
            if elapsed < self.frame {
                std::thread::sleep(self.frame - elapsed);
            }
        }
    }
}

/// Totals for a whole session
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub frames: u64,
    pub runs: Vec<RunSummary>,
}

impl RunReport {
    pub fn best_score(&self) -> u32 {
        self.runs.iter().map(|r| r.score).max().unwrap_or(0)
    }
}

/// Drive a session until the player quits or the platform closes
pub fn run<P: Platform>(platform: &mut P, game: &mut Game, clock: &mut FrameClock) -> RunReport {
    let mut report = RunReport::default();

    loop {
        clock.begin_frame();

        let Some(input) = platform.poll_input(game.phase()) else {
            log::info!("Platform closed, exiting");
            break;
        };

        match game.step(&input) {
            Step::Frame(snapshot) => platform.render(&snapshot),
            Step::RunEnded { snapshot, summary } => {
                platform.render(&snapshot);
                platform.show_game_over(&summary);
                report.runs.push(summary);
            }
            Step::Quit => break,
        }
        report.frames += 1;

        clock.end_frame();
    }

    report
}
