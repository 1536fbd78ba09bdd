//! Collision resolution
//!
//! Three passes in a fixed order:
//! 1. Player bullets against enemies (score and speedups)
//! 2. Enemies against the player (terminal)
//! 3. Enemy bullets against the player (terminal)
//!
//! Hits are marked during a read-only scan and removed afterwards, so the
//! scan always sees lists in insertion order.

use super::state::{GameEvent, HitCause, RunState};
use crate::config::GameConfig;

/// Result of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    /// Enemies destroyed by player bullets this tick
    pub kills: u32,
    /// Whether the enemy speed went up this tick
    pub sped_up: bool,
    /// Set when the player was hit; the run is over
    pub player_hit: Option<HitCause>,
}

impl CollisionOutcome {
    pub fn is_terminal(&self) -> bool {
        self.player_hit.is_some()
    }
}

/// Resolve all overlaps for the current tick
pub fn resolve_collisions(state: &mut RunState, config: &GameConfig) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    // === Player bullets vs enemies ===
    let mut spent_bullets = vec![false; state.bullets.len()];
    let mut dead_enemies = vec![false; state.enemies.len()];

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !dead_enemies[*ei] && bullet.rect.overlaps(&enemy.rect))
            .map(|(ei, _)| ei);

        if let Some(ei) = target {
            spent_bullets[bi] = true;
            dead_enemies[ei] = true;
            outcome.kills += 1;
        }
    }

    if outcome.kills > 0 {
        let mut spent = spent_bullets.iter();
        state.bullets.retain(|_| !spent.next().copied().unwrap_or(false));
        let mut dead = dead_enemies.iter();
        state.enemies.retain(|_| !dead.next().copied().unwrap_or(false));

        for _ in 0..outcome.kills {
            state.score += 1;
            state.events.push(GameEvent::EnemyDestroyed { score: state.score });

            // At most one speedup per tick
            if !outcome.sped_up && state.score % config.hits_for_speedup == 0 {
                state.enemy_speed += config.enemy_speed_increment;
                outcome.sped_up = true;
                state.events.push(GameEvent::SpeedUp {
                    speed: state.enemy_speed,
                });
            }
        }
    }

    // === Enemies vs player ===
    let player = state.player.rect;
    if state.enemies.iter().any(|e| e.rect.overlaps(&player)) {
        outcome.player_hit = Some(HitCause::Enemy);
    } else if state.enemy_bullets.iter().any(|b| b.rect.overlaps(&player)) {
        // === Enemy bullets vs player ===
        outcome.player_hit = Some(HitCause::EnemyBullet);
    }

    if let Some(cause) = outcome.player_hit {
        state.events.push(GameEvent::PlayerHit { cause });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::{Enemy, EnemyBullet, PlayerBullet};
    use glam::DVec2;

    fn setup() -> (GameConfig, RunState) {
        let config = GameConfig::default();
        let state = RunState::new(&config, 17);
        (config, state)
    }

    fn bullet(x: i32, y: i32) -> PlayerBullet {
        PlayerBullet {
            rect: Rect::new(x, y, 5, 10),
        }
    }

    fn enemy(x: i32, y: i32, variant: usize) -> Enemy {
        Enemy {
            rect: Rect::new(x, y, 40, 30),
            variant,
        }
    }

    #[test]
    fn test_bullet_destroys_enemy() {
        let (config, mut state) = setup();
        assert_eq!(state.player.rect.x, 215);
        state.bullets.push(bullet(217, 100));
        state.enemies.push(enemy(210, 105, 0));

        let outcome = resolve_collisions(&mut state, &config);

        assert_eq!(outcome.kills, 1);
        assert!(!outcome.sped_up);
        assert!(!outcome.is_terminal());
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(state.enemy_speed, config.enemy_speed_start);
    }

    #[test]
    fn test_bullet_hits_first_inserted_enemy_only() {
        let (config, mut state) = setup();
        state.bullets.push(bullet(100, 100));
        state.enemies.push(enemy(90, 95, 0));
        state.enemies.push(enemy(95, 100, 1));

        let outcome = resolve_collisions(&mut state, &config);

        assert_eq!(outcome.kills, 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].variant, 1);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_two_bullets_one_enemy() {
        let (config, mut state) = setup();
        state.bullets.push(bullet(100, 100));
        state.bullets.push(bullet(110, 100));
        state.enemies.push(enemy(90, 95, 0));

        resolve_collisions(&mut state, &config);

        // First bullet claims the enemy; the second survives
        assert_eq!(state.score, 1);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].rect.x, 110);
    }

    #[test]
    fn test_speedup_on_tenth_hit() {
        let (config, mut state) = setup();
        state.score = 9;
        state.bullets.push(bullet(100, 100));
        state.enemies.push(enemy(90, 95, 0));

        let outcome = resolve_collisions(&mut state, &config);

        assert!(outcome.sped_up);
        assert_eq!(state.score, 10);
        assert_eq!(
            state.enemy_speed,
            config.enemy_speed_start + config.enemy_speed_increment
        );
        assert!(state.events.contains(&GameEvent::SpeedUp {
            speed: state.enemy_speed
        }));
    }

    #[test]
    fn test_speedup_at_most_once_per_tick() {
        let config = GameConfig {
            hits_for_speedup: 1,
            ..Default::default()
        };
        let mut state = RunState::new(&config, 17);
        state.bullets.push(bullet(100, 100));
        state.bullets.push(bullet(300, 100));
        state.enemies.push(enemy(90, 95, 0));
        state.enemies.push(enemy(290, 95, 1));

        let outcome = resolve_collisions(&mut state, &config);

        assert_eq!(outcome.kills, 2);
        assert_eq!(state.score, 2);
        assert_eq!(state.enemy_speed, config.enemy_speed_start + 1);
    }

    #[test]
    fn test_enemy_touching_player_is_terminal() {
        let (config, mut state) = setup();
        let p = state.player.rect;
        state.enemies.push(enemy(p.x, p.y - 10, 0));
        // A pending bullet hit elsewhere still resolves
        state.bullets.push(bullet(20, 100));
        state.enemies.push(enemy(10, 95, 1));

        let outcome = resolve_collisions(&mut state, &config);

        assert_eq!(outcome.player_hit, Some(HitCause::Enemy));
        assert_eq!(state.score, 1);
        assert!(state.events.contains(&GameEvent::PlayerHit {
            cause: HitCause::Enemy
        }));
    }

    #[test]
    fn test_bullet_kill_preempts_player_contact() {
        let (config, mut state) = setup();
        let p = state.player.rect;
        state.enemies.push(enemy(p.x, p.y - 20, 0));
        state.bullets.push(bullet(p.x + 5, p.y - 15));
        assert!(state.enemies[0].rect.overlaps(&p));

        // The bullet pass runs before the contact pass, so the enemy is
        // already gone when contact is checked

        let outcome = resolve_collisions(&mut state, &config);

        assert!(!outcome.is_terminal());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_enemy_bullet_hits_player() {
        let (config, mut state) = setup();
        let p = state.player.rect;
        state.enemy_bullets.push(EnemyBullet {
            rect: Rect::new(p.x + 10, p.y + 5, 5, 10),
            vel: DVec2::new(0.0, 6.0),
        });

        let outcome = resolve_collisions(&mut state, &config);
        assert_eq!(outcome.player_hit, Some(HitCause::EnemyBullet));
    }

    #[test]
    fn test_no_overlap_no_effect() {
        let (config, mut state) = setup();
        state.bullets.push(bullet(0, 0));
        state.enemies.push(enemy(300, 200, 0));
        state.enemy_bullets.push(EnemyBullet {
            rect: Rect::new(0, 300, 5, 10),
            vel: DVec2::ZERO,
        });

        let outcome = resolve_collisions(&mut state, &config);

        assert_eq!(outcome, CollisionOutcome::default());
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemy_bullets.len(), 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let (config, mut a) = setup();
        for i in 0..5 {
            a.bullets.push(bullet(50 + i * 30, 100 + i * 7));
        }
        for i in 0..6 {
            a.enemies.push(enemy(40 + i * 25, 95 + i * 5, i as usize % 3));
        }
        let mut b = a.clone();

        let oa = resolve_collisions(&mut a, &config);
        let ob = resolve_collisions(&mut b, &config);

        assert_eq!(oa, ob);
        assert_eq!(a.bullets, b.bullets);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.score, b.score);
        assert_eq!(a.enemy_speed, b.enemy_speed);
    }
}
