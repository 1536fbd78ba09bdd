//! Enemy spawning and radial bursts
//!
//! One enemy every `enemy_spawn_delay` ticks; every `spawns_per_burst`-th
//! enemy also fires a ring of bullets the moment it appears.

use rand::Rng;

use super::geometry::{Rect, radial_directions};
use super::state::{Enemy, EnemyBullet, GameEvent, RunState};
use crate::config::GameConfig;

/// Advance the spawn timer by one tick, spawning when it is due.
///
/// Returns the index of the newly spawned enemy, if any.
pub fn advance(state: &mut RunState, config: &GameConfig) -> Option<usize> {
    state.spawn_timer += 1;
    if state.spawn_timer < config.enemy_spawn_delay {
        return None;
    }
    state.spawn_timer = 0;

    let enemy = spawn_enemy(state, config);
    state.enemies.push(enemy);
    state.spawn_count += 1;
    state.events.push(GameEvent::EnemySpawned {
        variant: enemy.variant,
    });

    if state.spawn_count % config.spawns_per_burst == 0 {
        fire_burst(state, &enemy.rect, config);
    }

    Some(state.enemies.len() - 1)
}

/// New enemy just above the top edge at a random column with a random variant
pub fn spawn_enemy(state: &mut RunState, config: &GameConfig) -> Enemy {
    let variants = config.enemy_variants().max(1);
    let (w, h) = config.enemy_size;
    let max_x = (config.width - w).max(0);

    let rng = state.rng();
    let variant = rng.random_range(0..variants);
    let x = rng.random_range(0..=max_x);

    Enemy {
        rect: Rect::new(x, -h, w, h),
        variant,
    }
}

/// Emit a ring of enemy bullets from just below `source`'s bottom edge
pub fn fire_burst(state: &mut RunState, source: &Rect, config: &GameConfig) {
    let center_x = source.center_x();
    let top = source.bottom();

    for vel in radial_directions(config.enemy_bullet_burst, config.enemy_bullet_speed) {
        let mut rect = Rect::from_size(config.bullet_size);
        rect.set_center_x(center_x);
        rect.y = top;
        state.enemy_bullets.push(EnemyBullet { rect, vel });
    }

    state.events.push(GameEvent::BurstFired {
        origin: glam::IVec2::new(center_x, top),
        bullets: config.enemy_bullet_burst,
    });
}
