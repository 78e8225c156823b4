//! Per-frame session advance
//!
//! One call per rendered frame. The spawn countdown, the fall step, and
//! catch/despawn resolution all happen here; the wall-clock countdown is a
//! separate path through [`super::state::Session::second_elapsed`].

use glam::Vec2;

use super::spawn::{SpawnSource, spawn_interval};
use super::state::{EndReason, Item, ItemKind, Session};
use crate::consts::*;

/// Advance the session by one frame; no-op while inactive.
///
/// Items are scanned newest-first so removals never skip a neighbor.
pub fn tick(session: &mut Session, spawn: &mut dyn SpawnSource) {
    if !session.active {
        return;
    }

    session.spawn_timer += 1;
    if session.spawn_timer >= spawn_interval(session.level) {
        spawn_item(session, spawn);
        session.spawn_timer = 0;
    }

    let fall_bonus = session.level as f32 * FALL_SPEED_PER_LEVEL;
    let catcher_x = session.catcher.x();

    for i in (0..session.items.len()).rev() {
        let item = &mut session.items[i];
        item.pos.y += item.fall_speed + fall_bonus;
        let pos = item.pos;

        let in_band = pos.y >= CATCH_BAND_TOP && pos.y < CATCH_BAND_BOTTOM;
        if in_band && (pos.x - catcher_x).abs() < CATCH_PROXIMITY {
            let caught = session.items.remove(i);
            resolve_catch(session, &caught);
            if !session.active {
                // A hazard ended the session mid-scan; terminal state is final
                return;
            }
            continue;
        }

        if pos.y > DESPAWN_HEIGHT {
            // Fell past the bottom edge; no miss penalty
            session.items.remove(i);
        }
    }
}

/// Apply a catch: hazards terminate, good items score and may level up
fn resolve_catch(session: &mut Session, item: &Item) {
    match item.kind {
        ItemKind::Hazard => session.game_over(EndReason::HazardCaught),
        ItemKind::Good => {
            session.score += item.value;
            let level = 1 + (session.score / POINTS_PER_LEVEL) as u32;
            if level > session.level {
                log::info!("level up: {level}");
            }
            session.level = level;
        }
    }
}

fn spawn_item(session: &mut Session, spawn: &mut dyn SpawnSource) {
    let zone = spawn.zone();
    let kind = spawn.kind();
    let id = session.next_item_id();
    session.items.push(Item {
        id,
        zone,
        pos: Vec2::new(zone.x(), SPAWN_HEIGHT),
        kind,
        value: kind.value(),
        fall_speed: BASE_FALL_SPEED,
    });
}
