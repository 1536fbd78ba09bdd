//! Space Shooter - A fixed-tick vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, run state)
//! - `game`: Playing/GameOver session state machine
//! - `config`: Startup configuration (JSON + environment overrides)
//! - `scoreboard`: In-memory leaderboard for the current session
//! - `platform`: Input/render seam and the fixed frame clock

pub mod config;
pub mod game;
pub mod platform;
pub mod scoreboard;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, RunSummary, Step};
pub use scoreboard::Scoreboard;

/// Default gameplay constants
pub mod consts {
    /// World dimensions
    pub const WIDTH: i32 = 480;
    pub const HEIGHT: i32 = 600;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;

    /// Player horizontal step per tick
    pub const PLAYER_SPEED: i32 = 5;
    /// Player bullet upward step per tick
    pub const PLAYER_BULLET_SPEED: i32 = 10;
    /// Maximum player bullets alive at once
    pub const MAX_PLAYER_BULLETS: usize = 5;
    /// Gap between the player's bottom edge and the world's bottom edge
    pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

    /// Enemy speed at the start of a run, and the per-speedup increment
    pub const ENEMY_SPEED_START: i32 = 1;
    pub const ENEMY_SPEED_INCREMENT: i32 = 1;
    /// Hits between enemy speedups
    pub const HITS_FOR_SPEEDUP: u32 = 10;
    /// Ticks between enemy spawns
    pub const ENEMY_SPAWN_DELAY: u32 = 30;
    /// Every Nth spawned enemy fires a radial burst
    pub const SPAWNS_PER_BURST: u32 = 5;

    /// Enemy bullet speed (pixels per tick, before truncation)
    pub const ENEMY_BULLET_SPEED: f64 = 6.0;
    /// Bullets in one radial burst
    pub const ENEMY_BULLET_BURST: u32 = 12;

    /// Sprite sizes (match the fallback shapes used when an image is missing)
    pub const PLAYER_SIZE: (i32, i32) = (50, 38);
    pub const BULLET_SIZE: (i32, i32) = (5, 10);
    pub const ENEMY_SIZE: (i32, i32) = (40, 30);
}
