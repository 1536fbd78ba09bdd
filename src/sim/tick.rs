//! Fixed timestep simulation tick
//!
//! Core game loop that advances one run deterministically.

use super::collision::resolve_collisions;
use super::motion::{advance_enemies, advance_enemy_bullets, advance_player_bullets};
use super::snapshot::Snapshot;
use super::spawner;
use super::state::{GamePhase, RunState};
use crate::config::GameConfig;

/// Input sample for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Left held
    pub move_left: bool,
    /// Right held
    pub move_right: bool,
    /// Fire held or pressed
    pub fire: bool,
    /// Start a new run (GameOver only)
    pub replay: bool,
    /// Leave the game (GameOver only)
    pub quit: bool,
}

/// Advance the run by one tick.
///
/// In `GameOver` nothing is mutated and the phase is returned unchanged;
/// replay and quit are the session's business, not the simulation's.
pub fn tick(
    phase: GamePhase,
    state: &mut RunState,
    config: &GameConfig,
    input: &TickInput,
) -> (GamePhase, Snapshot) {
    if phase == GamePhase::GameOver {
        return (phase, Snapshot::capture(phase, state));
    }

    state.events.clear();
    state.time_ticks += 1;

    // Player input (both directions held cancel out)
    if input.move_left {
        state.player.shift(-config.player_speed, config.width);
    }
    if input.move_right {
        state.player.shift(config.player_speed, config.width);
    }
    if input.fire {
        state.try_fire(config);
    }

    advance_player_bullets(state, config);
    spawner::advance(state, config);
    advance_enemies(state, config);
    advance_enemy_bullets(state, config);

    let outcome = resolve_collisions(state, config);
    let phase = if outcome.is_terminal() {
        GamePhase::GameOver
    } else {
        GamePhase::Playing
    };

    (phase, Snapshot::capture(phase, state))
}
