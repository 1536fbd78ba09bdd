//! Per-tick movement and out-of-bounds culling
//!
//! Leaving the world is permanent: nothing wraps or bounces.

use glam::IVec2;

use super::state::RunState;
use crate::config::GameConfig;

/// Move player bullets up; drop those whose bottom edge passed the top
pub fn advance_player_bullets(state: &mut RunState, config: &GameConfig) {
    let step = IVec2::new(0, -config.player_bullet_speed);
    for bullet in &mut state.bullets {
        bullet.rect.translate(step);
    }
    state.bullets.retain(|b| b.rect.bottom() >= 0);
}

/// Move enemies down by the shared enemy speed; drop those below the floor
pub fn advance_enemies(state: &mut RunState, config: &GameConfig) {
    let step = IVec2::new(0, state.enemy_speed);
    for enemy in &mut state.enemies {
        enemy.rect.translate(step);
    }
    state.enemies.retain(|e| e.rect.top() <= config.height);
}

/// Move enemy bullets by their truncated velocity; drop any that left the world
pub fn advance_enemy_bullets(state: &mut RunState, config: &GameConfig) {
    for bullet in &mut state.enemy_bullets {
        let step = bullet.step();
        bullet.rect.translate(step);
    }
    state
        .enemy_bullets
        .retain(|b| !b.rect.is_outside(config.width, config.height));
}
