//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, integer positions
//! - Seeded RNG only (owned by the run)
//! - Insertion-order iteration for every entity list
//! - No rendering, logging or platform dependencies

pub mod collision;
pub mod geometry;
pub mod motion;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve_collisions};
pub use geometry::{Rect, radial_directions, rotate_deg};
pub use snapshot::{EnemyView, Snapshot};
pub use state::{
    Enemy, EnemyBullet, GameEvent, GamePhase, HitCause, Player, PlayerBullet, RunState,
};
pub use tick::{TickInput, tick};
