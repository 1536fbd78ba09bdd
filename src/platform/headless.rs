//! Headless platform
//!
//! Plays the game with a simple autopilot, no window required. Frames can
//! be streamed out as JSON lines for inspection or replay tooling.

use std::io::Write;

use serde::Serialize;

use super::Platform;
use crate::game::RunSummary;
use crate::sim::{GamePhase, Rect, Snapshot, TickInput};

/// How far above the player an enemy bullet counts as incoming
const DODGE_LOOKAHEAD: i32 = 80;
/// Extra horizontal margin around the player when looking for threats
const DODGE_MARGIN: i32 = 12;

/// Headless session limits
#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    /// Runs to play before quitting
    pub runs: u32,
    /// Hard cap on frames for the whole session (0 = no cap)
    pub max_frames: u64,
    /// Write every frame as a JSON line
    pub emit_snapshots: bool,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            runs: 1,
            max_frames: 0,
            emit_snapshots: false,
        }
    }
}

/// One line of the JSON output stream
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Frame(&'a Snapshot),
    GameOver(&'a RunSummary),
}

/// Autopilot-driven platform writing to `out`
pub struct HeadlessPlatform<W: Write> {
    options: HeadlessOptions,
    out: W,
    world_width: i32,
    last: Option<Snapshot>,
    frames: u64,
    runs_finished: u32,
}

impl<W: Write> HeadlessPlatform<W> {
    pub fn new(options: HeadlessOptions, world_width: i32, out: W) -> Self {
        Self {
            options,
            out,
            world_width,
            last: None,
            frames: 0,
            runs_finished: 0,
        }
    }

    pub fn runs_finished(&self) -> u32 {
        self.runs_finished
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, record: &Record) {
        if !self.options.emit_snapshots {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, record)
            .map_err(std::io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"));
        if let Err(e) = result {
            log::warn!("Failed to write snapshot: {}", e);
        }
    }
}

impl<W: Write> Platform for HeadlessPlatform<W> {
    fn poll_input(&mut self, phase: GamePhase) -> Option<TickInput> {
        if self.options.max_frames > 0 && self.frames >= self.options.max_frames {
            log::info!("Frame cap of {} reached", self.options.max_frames);
            return None;
        }
        self.frames += 1;

        match phase {
            GamePhase::GameOver => {
                if self.runs_finished >= self.options.runs {
                    Some(TickInput {
                        quit: true,
                        ..Default::default()
                    })
                } else {
                    self.last = None;
                    Some(TickInput {
                        replay: true,
                        ..Default::default()
                    })
                }
            }
            GamePhase::Playing => Some(
                self.last
                    .as_ref()
                    .map(|s| autopilot(s, self.world_width))
                    .unwrap_or(TickInput {
                        fire: true,
                        ..Default::default()
                    }),
            ),
        }
    }

    fn render(&mut self, snapshot: &Snapshot) {
        self.emit(&Record::Frame(snapshot));
        self.last = Some(snapshot.clone());
    }

    fn show_game_over(&mut self, summary: &RunSummary) {
        self.runs_finished += 1;
        self.emit(&Record::GameOver(summary));
        log::info!(
            "GAME OVER - run {} score {} (best {}, rank {:?})",
            summary.run,
            summary.score,
            summary.best,
            summary.rank
        );
    }
}

/// Pick an input for the next tick from the last frame.
///
/// Dodges the nearest incoming enemy bullet if there is one, otherwise
/// lines up under the lowest enemy. Always fires.
pub fn autopilot(snapshot: &Snapshot, world_width: i32) -> TickInput {
    let player = snapshot.player;
    let center = player.center_x();

    let danger_zone = Rect::new(
        player.left() - DODGE_MARGIN,
        player.top() - DODGE_LOOKAHEAD,
        player.w + 2 * DODGE_MARGIN,
        player.h + DODGE_LOOKAHEAD,
    );
    let threat = snapshot
        .enemy_bullets
        .iter()
        .filter(|b| b.overlaps(&danger_zone))
        .max_by_key(|b| b.bottom());

    let target_x = match threat {
        Some(bullet) => {
            // Step away from the bullet, unless a wall is in the way
            let go_right = bullet.center_x() <= center;
            let blocked = if go_right {
                player.right() >= world_width
            } else {
                player.left() <= 0
            };
            if go_right != blocked {
                world_width
            } else {
                0
            }
        }
        None => snapshot
            .enemies
            .iter()
            .max_by_key(|e| e.rect.bottom())
            .map(|e| e.rect.center_x())
            .unwrap_or(center),
    };

    let offset = target_x - center;
    TickInput {
        move_left: offset < -2,
        move_right: offset > 2,
        fire: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Game;
    use crate::platform::{FrameClock, run};
    use crate::sim::EnemyView;

    fn snapshot_with(enemies: Vec<EnemyView>, enemy_bullets: Vec<Rect>) -> Snapshot {
        Snapshot {
            phase: GamePhase::Playing,
            tick: 1,
            player: Rect::new(215, 552, 50, 38),
            bullets: Vec::new(),
            enemies,
            enemy_bullets,
            score: 0,
            enemy_speed: 1,
        }
    }

    #[test]
    fn test_autopilot_tracks_lowest_enemy() {
        let snapshot = snapshot_with(
            vec![
                EnemyView {
                    rect: Rect::new(400, 50, 40, 30),
                    variant: 0,
                },
                EnemyView {
                    rect: Rect::new(20, 200, 40, 30),
                    variant: 1,
                },
            ],
            Vec::new(),
        );
        let input = autopilot(&snapshot, 480);
        assert!(input.move_left);
        assert!(!input.move_right);
        assert!(input.fire);
    }

    #[test]
    fn test_autopilot_holds_when_aligned() {
        let snapshot = snapshot_with(
            vec![EnemyView {
                rect: Rect::new(220, 100, 40, 30),
                variant: 0,
            }],
            Vec::new(),
        );
        let input = autopilot(&snapshot, 480);
        assert!(!input.move_left && !input.move_right);
    }

    #[test]
    fn test_autopilot_dodges_bullet() {
        // Bullet slightly left of the player's center, just above it
        let snapshot = snapshot_with(Vec::new(), vec![Rect::new(230, 500, 5, 10)]);
        let input = autopilot(&snapshot, 480);
        assert!(input.move_right);
        assert!(!input.move_left);
    }

    #[test]
    fn test_autopilot_dodges_away_from_wall() {
        let mut snapshot = snapshot_with(Vec::new(), vec![Rect::new(10, 500, 5, 10)]);
        snapshot.player = Rect::new(430, 552, 50, 38);
        snapshot.enemy_bullets = vec![Rect::new(440, 500, 5, 10)];
        let input = autopilot(&snapshot, 480);
        assert!(input.move_left);
    }

    #[test]
    fn test_headless_session_finishes() {
        let config = GameConfig::default();
        let mut game = Game::new(config.clone(), 2);
        let options = HeadlessOptions {
            runs: 2,
            max_frames: 200_000,
            emit_snapshots: false,
        };
        let mut platform = HeadlessPlatform::new(options, config.width, Vec::new());
        let mut clock = FrameClock::from_config(&config, false);

        let report = run(&mut platform, &mut game, &mut clock);

        assert!(report.frames <= 200_000);
        assert!(report.runs.len() <= 2);
        assert_eq!(platform.runs_finished() as usize, report.runs.len());
        assert!(platform.into_inner().is_empty());
    }

    #[test]
    fn test_snapshots_are_json_lines() {
        let config = GameConfig::default();
        let mut game = Game::new(config.clone(), 8);
        let options = HeadlessOptions {
            runs: 1,
            max_frames: 5,
            emit_snapshots: true,
        };
        let mut platform = HeadlessPlatform::new(options, config.width, Vec::new());
        let mut clock = FrameClock::from_config(&config, false);

        run(&mut platform, &mut game, &mut clock);

        let out = String::from_utf8(platform.into_inner()).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            assert_eq!(value["type"], "frame");
            assert_eq!(value["tick"], (i + 1) as u64);
            assert_eq!(value["player"]["w"], 50);
        }
    }
}
