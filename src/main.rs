//! Squash entry point
//!
//! Runs a headless session: the menu is driven by scripted key presses and
//! the paddle by a simple autopilot that chases the ball.
//!
//! Usage: `squash [settings.json] [seed]`

use std::path::PathBuf;

use squash::platform::{DeviceState, InputEvent, Key};
use squash::states::Hud;
use squash::{Settings, StateStack, View};

/// Demo length cap, in ticks
const MAX_TICKS: u64 = 60 * 60 * 10;
/// Ticks between status lines
const STATUS_INTERVAL: u64 = 600;
const DEFAULT_SEED: u64 = 0x5EED;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Squash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = args
        .next()
        .map(PathBuf::from)
        .map(|path| Settings::load_from(&path))
        .unwrap_or_default();
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let mut stack = StateStack::new(settings, seed);

    // Start on the highlighted (Normal) difficulty
    stack.dispatch(&[InputEvent::KeyDown(Key::Enter)], &DeviceState::default());

    let mut ticks = 0;
    while !stack.should_quit() && ticks < MAX_TICKS {
        match stack.render() {
            Some(View::Playing(hud)) => {
                if ticks % STATUS_INTERVAL == 0 {
                    log::info!(
                        "t={} score={} level={} lives={} mode={} ball={}",
                        ticks,
                        hud.score,
                        hud.level,
                        hud.lives,
                        hud.mode,
                        hud.ball_variant
                    );
                }
                stack.dispatch(&[], &autopilot(&hud));
            }
            Some(View::GameOver(summary)) => {
                log::info!(
                    "Final score {} (level {}, best combo x{}, {:.1}% accuracy) - {}",
                    summary.score,
                    summary.level,
                    summary.best_combo,
                    summary.accuracy,
                    summary.message
                );
                if let Some(rank) = summary.rank {
                    log::info!("Leaderboard rank #{}", rank);
                }
                break;
            }
            other => {
                log::warn!("Unexpected screen {:?}, stopping", other);
                break;
            }
        }
        ticks += 1;
    }

    if ticks >= MAX_TICKS {
        log::info!("Tick limit reached");
    }
}

/// Hold left/right to keep the paddle under the ball
fn autopilot(hud: &Hud) -> DeviceState {
    let (x, _, width, _) = hud.paddle;
    let center = x + width / 2.0;
    let slack = width / 4.0;
    let target = hud.ball_pos.0;

    if target < center - slack {
        DeviceState::with_keys(&[Key::Left])
    } else if target > center + slack {
        DeviceState::with_keys(&[Key::Right])
    } else {
        DeviceState::default()
    }
}
