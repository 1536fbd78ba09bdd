//! Run state and entity types
//!
//! A `RunState` is everything that lives for exactly one run. Replaying
//! discards it and builds a fresh one; nothing carries over.

use glam::{DVec2, IVec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for replay or quit
    GameOver,
}

/// The player's craft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Centered horizontally, resting `player_bottom_margin` above the floor
    pub fn spawn(config: &GameConfig) -> Self {
        let mut rect = Rect::from_size(config.player_size);
        rect.set_center_x(config.width / 2);
        rect.set_bottom(config.height - config.player_bottom_margin);
        Self { rect }
    }

    /// Step horizontally, staying inside `[0, width - player_width]`
    pub fn shift(&mut self, dx: i32, world_width: i32) {
        let max_x = world_width - self.rect.w;
        self.rect.x = (self.rect.x + dx).clamp(0, max_x.max(0));
    }
}

/// A player projectile travelling straight up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerBullet {
    pub rect: Rect,
}

impl PlayerBullet {
    /// New bullet centered on the player, sitting on the player's top edge
    pub fn fired_from(player: &Player, size: (i32, i32)) -> Self {
        let mut rect = Rect::from_size(size);
        rect.set_center_x(player.rect.center_x());
        rect.set_bottom(player.rect.top());
        Self { rect }
    }
}

/// A descending enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub rect: Rect,
    /// Sprite index, cosmetic only
    pub variant: usize,
}

/// An enemy projectile with its own velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyBullet {
    pub rect: Rect,
    /// Velocity in pixels per tick; truncated toward zero when applied
    pub vel: DVec2,
}

impl EnemyBullet {
    /// Integer step applied each tick (fractional parts are dropped)
    pub fn step(&self) -> IVec2 {
        IVec2::new(self.vel.x as i32, self.vel.y as i32)
    }
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Enemy,
    EnemyBullet,
}

/// Notable things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { variant: usize },
    BurstFired { origin: IVec2, bullets: u32 },
    EnemyDestroyed { score: u32 },
    SpeedUp { speed: i32 },
    PlayerHit { cause: HitCause },
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct RunState {
    /// Seed this run's RNG was built from
    pub seed: u64,
    rng: Pcg32,
    /// Ticks simulated so far
    pub time_ticks: u64,
    pub player: Player,
    /// Player bullets in firing order
    pub bullets: Vec<PlayerBullet>,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Enemy bullets in creation order
    pub enemy_bullets: Vec<EnemyBullet>,
    pub score: u32,
    /// Shared downward step for every enemy
    pub enemy_speed: i32,
    /// Enemies spawned this run (never reset)
    pub spawn_count: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl RunState {
    /// Fresh run with the given seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            player: Player::spawn(config),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            score: 0,
            enemy_speed: config.enemy_speed_start,
            spawn_count: 0,
            spawn_timer: 0,
            events: Vec::new(),
        }
    }

    /// The run's RNG (spawn placement and enemy variants)
    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Fire a player bullet unless the cap is reached. Returns whether one was added.
    pub fn try_fire(&mut self, config: &GameConfig) -> bool {
        if self.bullets.len() >= config.max_player_bullets {
            return false;
        }
        self.bullets
            .push(PlayerBullet::fired_from(&self.player, config.bullet_size));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_position() {
        let config = GameConfig::default();
        let player = Player::spawn(&config);
        assert_eq!(player.rect, Rect::new(215, 552, 50, 38));
    }

    #[test]
    fn test_player_shift_clamps() {
        let config = GameConfig::default();
        let mut player = Player::spawn(&config);

        player.shift(-1000, config.width);
        assert_eq!(player.rect.x, 0);

        player.shift(1000, config.width);
        assert_eq!(player.rect.x, config.width - player.rect.w);

        player.shift(-5, config.width);
        assert_eq!(player.rect.x, 425);
    }

    #[test]
    fn test_bullet_fired_from_player_top() {
        let config = GameConfig::default();
        let player = Player::spawn(&config);
        let bullet = PlayerBullet::fired_from(&player, config.bullet_size);
        assert_eq!(bullet.rect, Rect::new(238, 542, 5, 10));
    }

    #[test]
    fn test_try_fire_respects_cap() {
        let config = GameConfig::default();
        let mut state = RunState::new(&config, 1);

        for _ in 0..config.max_player_bullets {
            assert!(state.try_fire(&config));
        }
        assert!(!state.try_fire(&config));
        assert_eq!(state.bullets.len(), 5);
    }

    #[test]
    fn test_enemy_bullet_step_truncates_toward_zero() {
        let bullet = EnemyBullet {
            rect: Rect::from_size((5, 10)),
            vel: DVec2::new(5.196, -2.9999),
        };
        assert_eq!(bullet.step(), IVec2::new(5, -2));
    }

    #[test]
    fn test_new_run_is_clean() {
        let config = GameConfig::default();
        let state = RunState::new(&config, 42);
        assert_eq!(state.score, 0);
        assert_eq!(state.enemy_speed, config.enemy_speed_start);
        assert_eq!(state.spawn_count, 0);
        assert_eq!(state.spawn_timer, 0);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.enemy_bullets.is_empty());
    }
}
