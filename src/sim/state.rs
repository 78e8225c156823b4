//! Session state and core game types
//!
//! Everything a rendering collaborator reads back lives here. The session
//! holds no reference to any scheduler; the one-second countdown driver is
//! admitted only through the [`Countdown`] handle issued by [`Session::start`].

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;

/// One of the three horizontal lanes the catcher and items occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Zone {
    Left,
    #[default]
    Center,
    Right,
}

impl Zone {
    /// All lanes, left to right
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

    /// Fixed x-coordinate of the lane
    #[inline]
    pub fn x(self) -> f32 {
        match self {
            Zone::Left => ZONE_LEFT_X,
            Zone::Center => ZONE_CENTER_X,
            Zone::Right => ZONE_RIGHT_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Left => "LEFT",
            Zone::Center => "CENTER",
            Zone::Right => "RIGHT",
        }
    }

    /// Lenient mapping from a free-form classifier label.
    ///
    /// Case-insensitive substring match, checked LEFT, then RIGHT, then
    /// CENTER - first hit wins. Upstream labels are noisy ("Lean Left",
    /// "center-ish"), so anything containing a lane name counts; anything
    /// else maps to `None`.
    pub fn from_label(label: &str) -> Option<Zone> {
        let label = label.to_ascii_uppercase();
        if label.contains("LEFT") {
            Some(Zone::Left)
        } else if label.contains("RIGHT") {
            Some(Zone::Right)
        } else if label.contains("CENTER") {
            Some(Zone::Center)
        } else {
            None
        }
    }
}

/// What a falling item does when caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    /// Scores points
    Good,
    /// Ends the session
    Hazard,
}

impl ItemKind {
    /// Points awarded on catch
    pub fn value(self) -> u64 {
        match self {
            ItemKind::Good => GOOD_ITEM_VALUE,
            ItemKind::Hazard => 0,
        }
    }
}

/// A falling item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u32,
    /// Lane the item falls in (fixes `pos.x`)
    pub zone: Zone,
    /// Position; `y` grows downward every tick
    pub pos: Vec2,
    pub kind: ItemKind,
    /// Points awarded on catch
    pub value: u64,
    /// Fall speed before the per-level bonus
    pub fall_speed: f32,
}

/// Options accepted by [`Session::start`]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StartOptions {
    /// Session length in seconds; 0 falls back to the default
    pub time_limit: u32,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

/// Why the session terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    HazardCaught,
    TimeExpired,
}

/// Terminal event emitted once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionEnd {
    pub score: u64,
    pub level: u32,
    pub reason: EndReason,
}

/// Cancellation handle for the one-second countdown.
///
/// Issued by [`Session::start`]; a later `start` or `stop` invalidates every
/// previously issued handle, so a timer that outlives its session cannot
/// touch the new one.
#[derive(Debug, Clone)]
pub struct Countdown {
    pub(crate) epoch: u64,
}

/// Listener invoked with the terminal event
pub type EndListener = Box<dyn FnMut(&SessionEnd)>;

/// Complete mutable state for one play-through
#[derive(Serialize)]
pub struct Session {
    pub score: u64,
    /// 1 + score/1000, never decreases while active
    pub level: u32,
    /// Whole seconds left before time expiry
    pub remaining_secs: u32,
    pub active: bool,
    /// Lane the catcher currently occupies
    pub catcher: Zone,
    /// Falling items, oldest first
    pub items: Vec<Item>,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Terminal event of the last play-through, if it ended (not on stop)
    pub last_end: Option<SessionEnd>,
    countdown_epoch: u64,
    next_id: u32,
    #[serde(skip)]
    end_listener: Option<EndListener>,
}

impl Session {
    /// Create an idle session; nothing moves until [`Session::start`]
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            remaining_secs: DEFAULT_TIME_LIMIT_SECS,
            active: false,
            catcher: Zone::Center,
            items: Vec::new(),
            spawn_timer: 0,
            last_end: None,
            countdown_epoch: 0,
            next_id: 1,
            end_listener: None,
        }
    }

    /// Reset all state and go active.
    ///
    /// Safe to call while a session is already running: the previous
    /// countdown handle is invalidated before the new one is issued, so no
    /// two countdowns can ever drive the same session.
    pub fn start(&mut self, options: StartOptions) -> Countdown {
        let time_limit = if options.time_limit == 0 {
            DEFAULT_TIME_LIMIT_SECS
        } else {
            options.time_limit
        };

        self.score = 0;
        self.level = 1;
        self.remaining_secs = time_limit;
        self.catcher = Zone::Center;
        self.items.clear();
        self.spawn_timer = 0;
        self.last_end = None;
        self.active = true;
        self.countdown_epoch += 1;

        log::info!("session started ({time_limit}s)");
        Countdown {
            epoch: self.countdown_epoch,
        }
    }

    /// Halt the session, leaving the last state observable.
    ///
    /// No-op while inactive. Cancels the countdown by invalidating every
    /// outstanding handle.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.countdown_epoch += 1;
        log::info!("session stopped at score {}", self.score);
    }

    /// Terminate the session and emit the terminal event.
    ///
    /// Idempotent: both the hazard path and the time path may race to call
    /// this within one frame; only the first does anything.
    pub fn game_over(&mut self, reason: EndReason) {
        if !self.active {
            return;
        }
        self.stop();
        let end = SessionEnd {
            score: self.score,
            level: self.level,
            reason,
        };
        self.last_end = Some(end);
        match self.end_listener.as_mut() {
            Some(listener) => listener(&end),
            None => log::warn!(
                "session ended ({reason:?}) with no listener: score {} level {}",
                end.score,
                end.level
            ),
        }
    }

    /// One-second countdown step, called by the wall-clock driver.
    ///
    /// Ignores handles from a previous start and does nothing while
    /// inactive. Reaching zero terminates the session.
    pub fn second_elapsed(&mut self, countdown: &Countdown) {
        if !self.active || countdown.epoch != self.countdown_epoch {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.game_over(EndReason::TimeExpired);
        }
    }

    /// Move the catcher according to a classifier label.
    ///
    /// Unrecognized labels leave the catcher where it is.
    pub fn on_position_command(&mut self, label: &str) {
        if let Some(zone) = Zone::from_label(label) {
            self.catcher = zone;
        }
    }

    /// Register the listener for the terminal event.
    ///
    /// Without one, termination is surfaced through the log.
    pub fn set_end_listener(&mut self, listener: impl FnMut(&SessionEnd) + 'static) {
        self.end_listener = Some(Box::new(listener));
    }

    /// Allocate a new item ID
    pub(crate) fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
