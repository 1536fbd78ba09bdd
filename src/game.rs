//! Session state machine
//!
//! A `Game` alternates between `Playing` (ticking the current run) and
//! `GameOver` (waiting for replay or quit). Replay throws the old
//! `RunState` away and starts a fresh one.

use serde::Serialize;

use crate::config::GameConfig;
use crate::scoreboard::{ScoreEntry, Scoreboard};
use crate::sim::{GameEvent, GamePhase, HitCause, RunState, Snapshot, TickInput, tick};

/// Final numbers of a finished run, handed to the game-over screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Run number within the session (1-based)
    pub run: u32,
    pub seed: u64,
    pub score: u32,
    pub enemy_speed: i32,
    pub ticks: u64,
    pub cause: Option<HitCause>,
    /// Leaderboard rank achieved, if any
    pub rank: Option<usize>,
    /// Best score this session, including this run
    pub best: u32,
}

/// What a session step produced
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A regular frame (playing, or idling on the game-over screen)
    Frame(Snapshot),
    /// The run just ended on this tick
    RunEnded {
        snapshot: Snapshot,
        summary: RunSummary,
    },
    /// The player asked to leave
    Quit,
}

/// One play session: the current run plus the session leaderboard
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    run: RunState,
    base_seed: u64,
    run_number: u32,
    scoreboard: Scoreboard,
}

impl Game {
    /// Start a session; the first run begins immediately.
    ///
    /// `config` must have passed [`GameConfig::validate`]: zero speedup or
    /// burst periods and non-positive sizes are not guarded against here.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated game config");
        let run = RunState::new(&config, seed);
        log::info!("Run 1 started (seed {})", seed);
        Self {
            config,
            phase: GamePhase::Playing,
            run,
            base_seed: seed,
            run_number: 1,
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    #[cfg(test)]
    pub(crate) fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    pub fn run_number(&self) -> u32 {
        self.run_number
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Current frame without advancing anything
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.phase, &self.run)
    }

    /// Advance the session by one tick
    pub fn step(&mut self, input: &TickInput) -> Step {
        match self.phase {
            GamePhase::Playing => {
                let (phase, snapshot) = tick(self.phase, &mut self.run, &self.config, input);
                self.log_events();
                self.phase = phase;

                if phase == GamePhase::GameOver {
                    let summary = self.finish_run();
                    Step::RunEnded { snapshot, summary }
                } else {
                    Step::Frame(snapshot)
                }
            }
            GamePhase::GameOver => {
                if input.quit {
                    log::info!("Quit after {} run(s)", self.run_number);
                    Step::Quit
                } else if input.replay {
                    self.restart();
                    Step::Frame(self.snapshot())
                } else {
                    Step::Frame(self.snapshot())
                }
            }
        }
    }

    /// Throw away the finished run and start the next one
    fn restart(&mut self) {
        self.run_number += 1;
        let seed = self.base_seed.wrapping_add(self.run_number as u64 - 1);
        self.run = RunState::new(&self.config, seed);
        self.phase = GamePhase::Playing;
        log::info!("Run {} started (seed {})", self.run_number, seed);
    }

    fn finish_run(&mut self) -> RunSummary {
        let cause = self.run.events.iter().find_map(|e| match e {
            GameEvent::PlayerHit { cause } => Some(*cause),
            _ => None,
        });
        let mut summary = RunSummary {
            run: self.run_number,
            seed: self.run.seed,
            score: self.run.score,
            enemy_speed: self.run.enemy_speed,
            ticks: self.run.time_ticks,
            cause,
            rank: None,
            best: 0,
        };
        summary.rank = self.scoreboard.record(ScoreEntry::from(&summary));
        summary.best = self.scoreboard.top_score().unwrap_or(0).max(summary.score);

        log::info!(
            "Game over: run {} scored {} after {} ticks ({:?})",
            summary.run,
            summary.score,
            summary.ticks,
            cause
        );
        summary
    }

    fn log_events(&self) {
        for event in &self.run.events {
            match event {
                GameEvent::SpeedUp { speed } => {
                    log::info!("Enemies speed up to {} (score {})", speed, self.run.score)
                }
                GameEvent::BurstFired { origin, bullets } => {
                    log::debug!("Burst of {} bullets at {:?}", bullets, origin)
                }
                GameEvent::EnemySpawned { variant } => {
                    log::trace!("Enemy spawned (variant {})", variant)
                }
                GameEvent::EnemyDestroyed { score } => {
                    log::trace!("Enemy destroyed, score {}", score)
                }
                GameEvent::PlayerHit { cause } => log::debug!("Player hit by {:?}", cause),
            }
        }
    }
}
