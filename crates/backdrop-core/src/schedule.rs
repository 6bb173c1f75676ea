//! Time sources, event throttling and the repeating theme timer.
//!
//! Everything takes "now" as a [`Duration`] since an arbitrary origin so the
//! same code runs against the wall clock in the browser and against a
//! [`ManualClock`] in tests.

use crate::theme::Season;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub trait Clock {
    fn now(&self) -> Duration;
}

/// Monotonic wall clock, measured from construction.
#[derive(Clone, Debug)]
pub struct InstantClock {
    origin: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for InstantClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Admits at most one event per window; events inside the window are
/// dropped, not queued.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn admit(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) < self.window => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Fires once per elapsed period. Periods missed while nobody polled (a
/// backgrounded tab, say) collapse into a single firing.
#[derive(Clone, Copy, Debug)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Duration,
}

impl RepeatingTimer {
    pub fn new(period: Duration, now: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn poll(&mut self, now: Duration) -> bool {
        if now < self.next_due {
            return false;
        }
        let behind = now - self.next_due;
        let missed = (behind.as_nanos() / self.period.as_nanos()) as u32;
        if missed > 0 {
            log::debug!("[timer] coalescing {missed} missed periods");
        }
        self.next_due += self.period * (missed + 1);
        true
    }

    pub fn restart(&mut self, now: Duration) {
        self.next_due = now + self.period;
    }
}

/// Seasonal theme rotation: spring, summer, autumn, winter, repeat.
#[derive(Clone, Copy, Debug)]
pub struct SeasonRotation {
    season: Season,
    timer: RepeatingTimer,
}

impl SeasonRotation {
    pub fn new(start: Season, period: Duration, now: Duration) -> Self {
        Self {
            season: start,
            timer: RepeatingTimer::new(period, now),
        }
    }

    /// Start from the season of the given calendar month.
    pub fn from_month(month: u32, period: Duration, now: Duration) -> Self {
        Self::new(Season::from_month(month), period, now)
    }

    pub fn current(&self) -> Season {
        self.season
    }

    /// Advance at most one season. Returns the new season when it changed.
    pub fn poll(&mut self, now: Duration) -> Option<Season> {
        if !self.timer.poll(now) {
            return None;
        }
        let next = self.season.next();
        log::info!("[theme] season {:?} -> {:?}", self.season, next);
        self.season = next;
        Some(next)
    }
}
