//! Read-only per-tick view of the run for renderers

use serde::Serialize;

use super::geometry::Rect;
use super::state::{GamePhase, RunState};

/// An enemy as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnemyView {
    pub rect: Rect,
    pub variant: usize,
}

/// Everything needed to draw one frame. Lists keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub player: Rect,
    pub bullets: Vec<Rect>,
    pub enemies: Vec<EnemyView>,
    pub enemy_bullets: Vec<Rect>,
    pub score: u32,
    pub enemy_speed: i32,
}

impl Snapshot {
    pub fn capture(phase: GamePhase, state: &RunState) -> Self {
        Self {
            phase,
            tick: state.time_ticks,
            player: state.player.rect,
            bullets: state.bullets.iter().map(|b| b.rect).collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    rect: e.rect,
                    variant: e.variant,
                })
                .collect(),
            enemy_bullets: state.enemy_bullets.iter().map(|b| b.rect).collect(),
            score: state.score,
            enemy_speed: state.enemy_speed,
        }
    }
}
