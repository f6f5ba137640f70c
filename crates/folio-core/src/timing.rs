//! Clock capability plus the debounce, throttle and frame-limit combinators.
//!
//! None of these own a timer. The host polls them from its frame loop with the
//! current time, which keeps them testable with [`ManualClock`].

use std::cell::Cell;

use instant::Instant;

/// Monotonic milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `instant` (performance.now on the web).
#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-advanced clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Cancel-and-reschedule: only the last trigger inside the window fires.
#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// (Re)start the window from `now_ms`, dropping any pending deadline.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(d) if now_ms >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Leading-edge only: the first call fires, the rest are dropped until the
/// window has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            open_at: None,
        }
    }

    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(t) if now_ms < t => false,
            _ => {
                self.open_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }
}

/// Caps a `requestAnimationFrame` loop to a target rate, carrying the
/// remainder so the average rate does not drift.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval_ms: f64,
    last_ms: f64,
}

impl FrameLimiter {
    pub fn new(fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / fps.max(1.0),
            last_ms: 0.0,
        }
    }

    pub fn ready(&mut self, timestamp_ms: f64) -> bool {
        let elapsed = timestamp_ms - self.last_ms;
        if elapsed > self.interval_ms {
            self.last_ms = timestamp_ms - (elapsed % self.interval_ms);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = 0.0;
    }
}
