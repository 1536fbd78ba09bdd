//! Game configuration
//!
//! Resolved once at startup (defaults → JSON file → environment) and
//! validated before the simulation ever sees it. The core treats a
//! `GameConfig` as immutable and always valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while resolving configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Image paths handed to the external asset loader.
///
/// The simulation only uses the number of enemy images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub player: String,
    pub bullet: String,
    pub enemies: Vec<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "background.png".to_string(),
            player: "spaceship.png".to_string(),
            bullet: "bullet.png".to_string(),
            enemies: vec![
                "enemy1.png".to_string(),
                "enemy2.png".to_string(),
                "enemy3.png".to_string(),
            ],
        }
    }
}

/// Complete gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === World ===
    pub width: i32,
    pub height: i32,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Player ===
    pub player_speed: i32,
    /// Upward step of a player bullet per tick
    pub player_bullet_speed: i32,
    pub max_player_bullets: usize,
    pub player_bottom_margin: i32,

    // === Enemies ===
    pub enemy_speed_start: i32,
    pub enemy_speed_increment: i32,
    pub hits_for_speedup: u32,
    pub enemy_spawn_delay: u32,
    pub spawns_per_burst: u32,
    pub enemy_bullet_speed: f64,
    pub enemy_bullet_burst: u32,

    // === Sprite sizes (width, height) ===
    pub player_size: (i32, i32),
    pub bullet_size: (i32, i32),
    pub enemy_size: (i32, i32),

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            tick_rate: TICK_RATE,

            player_speed: PLAYER_SPEED,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            max_player_bullets: MAX_PLAYER_BULLETS,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            enemy_speed_start: ENEMY_SPEED_START,
            enemy_speed_increment: ENEMY_SPEED_INCREMENT,
            hits_for_speedup: HITS_FOR_SPEEDUP,
            enemy_spawn_delay: ENEMY_SPAWN_DELAY,
            spawns_per_burst: SPAWNS_PER_BURST,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_bullet_burst: ENEMY_BULLET_BURST,

            player_size: PLAYER_SIZE,
            bullet_size: BULLET_SIZE,
            enemy_size: ENEMY_SIZE,

            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Environment variables that override asset paths
    pub const ENV_BACKGROUND: &'static str = "BACKGROUND_IMG_PATH";
    pub const ENV_PLAYER: &'static str = "PLAYER_IMG_PATH";
    pub const ENV_BULLET: &'static str = "BULLET_IMG_PATH";
    pub const ENV_ENEMIES: &'static str = "ENEMY_IMG_PATHS";

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply asset-path overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply asset-path overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(Self::ENV_BACKGROUND) {
            self.assets.background = path;
        }
        if let Some(path) = lookup(Self::ENV_PLAYER) {
            self.assets.player = path;
        }
        if let Some(path) = lookup(Self::ENV_BULLET) {
            self.assets.bullet = path;
        }
        if let Some(list) = lookup(Self::ENV_ENEMIES) {
            self.assets.enemies = list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    /// Number of cosmetic enemy variants
    pub fn enemy_variants(&self) -> usize {
        self.assets.enemies.len()
    }

    /// Simulation tick length in seconds
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: i64) -> Result<()> {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
            Ok(())
        }

        positive("width", self.width as i64)?;
        positive("height", self.height as i64)?;
        positive("tick_rate", self.tick_rate as i64)?;
        positive("player_speed", self.player_speed as i64)?;
        positive("player_bullet_speed", self.player_bullet_speed as i64)?;
        positive("max_player_bullets", self.max_player_bullets as i64)?;
        positive("enemy_speed_start", self.enemy_speed_start as i64)?;
        positive("hits_for_speedup", self.hits_for_speedup as i64)?;
        positive("enemy_spawn_delay", self.enemy_spawn_delay as i64)?;
        positive("spawns_per_burst", self.spawns_per_burst as i64)?;

        if self.enemy_speed_increment < 0 {
            return Err(ConfigError::Invalid(format!(
                "enemy_speed_increment must not be negative, got {}",
                self.enemy_speed_increment
            )));
        }
        if self.player_bottom_margin < 0 {
            return Err(ConfigError::Invalid(format!(
                "player_bottom_margin must not be negative, got {}",
                self.player_bottom_margin
            )));
        }
        if !self.enemy_bullet_speed.is_finite() || self.enemy_bullet_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "enemy_bullet_speed must be a finite non-negative number, got {}",
                self.enemy_bullet_speed
            )));
        }

        for (name, (w, h)) in [
            ("player_size", self.player_size),
            ("bullet_size", self.bullet_size),
            ("enemy_size", self.enemy_size),
        ] {
            if w <= 0 || h <= 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {w}x{h}")));
            }
            if w > self.width || h > self.height {
                return Err(ConfigError::Invalid(format!(
                    "{name} {w}x{h} does not fit a {}x{} world",
                    self.width, self.height
                )));
            }
        }
        if self.player_size.1 + self.player_bottom_margin > self.height {
            return Err(ConfigError::Invalid(
                "player does not fit above the bottom margin".to_string(),
            ));
        }

        if self.assets.enemies.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one enemy image path is required".to_string(),
            ));
        }

        Ok(())
    }
}
