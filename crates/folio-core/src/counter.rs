//! Count-up animation for the stats block ("12+").

use crate::constants::{COUNTER_DURATION_MS, COUNTER_STEP_MS};

/// Counts from 0 to `target` over a fixed duration measured on the frame
/// clock, advancing in 16 ms steps so the label ticks at the same pace on
/// any refresh rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: u32,
    start_ms: f64,
    steps: f64,
    shown: Option<u32>,
    done: bool,
}

impl Counter {
    pub fn new(target: u32, start_ms: f64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS, start_ms)
    }

    pub fn with_duration(target: u32, duration_ms: f64, start_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            steps: (duration_ms / COUNTER_STEP_MS).floor().max(1.0),
            shown: None,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Label for `now_ms` when it differs from the last one returned.
    /// `None` while unchanged and once finished.
    pub fn sample(&mut self, now_ms: f64) -> Option<String> {
        if self.done {
            return None;
        }
        let elapsed_steps = ((now_ms - self.start_ms).max(0.0) / COUNTER_STEP_MS).floor();
        let progress = (elapsed_steps / self.steps).min(1.0);
        let value = if progress >= 1.0 {
            self.done = true;
            self.target
        } else {
            (self.target as f64 * progress).floor() as u32
        };
        if self.shown == Some(value) && !self.done {
            return None;
        }
        self.shown = Some(value);
        Some(format!("{}+", value))
    }
}

/// Leading integer of a stat label such as "25+" or "8 years".
pub fn parse_stat(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
