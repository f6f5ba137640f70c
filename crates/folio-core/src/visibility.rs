//! Enter/leave bookkeeping behind the viewport observer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserveMode {
    /// Report the first entry only, then stop observing.
    Once,
    /// Report every enter and leave.
    Continuous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
}

/// Turns raw "is intersecting" notifications into edge events.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityTracker {
    mode: ObserveMode,
    visible: bool,
    fired: bool,
}

impl VisibilityTracker {
    pub fn new(mode: ObserveMode) -> Self {
        Self {
            mode,
            visible: false,
            fired: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True once a `Once` tracker has reported; the host can unobserve.
    pub fn is_done(&self) -> bool {
        self.mode == ObserveMode::Once && self.fired
    }

    pub fn update(&mut self, intersecting: bool) -> Option<VisibilityChange> {
        if self.is_done() || intersecting == self.visible {
            return None;
        }
        self.visible = intersecting;
        if intersecting {
            self.fired = true;
            Some(VisibilityChange::Entered)
        } else if self.mode == ObserveMode::Continuous {
            Some(VisibilityChange::Left)
        } else {
            None
        }
    }
}

/// Delay for the `n`th element revealed in one observer batch.
#[inline]
pub fn reveal_delay_ms(batch_index: usize, stagger_ms: f64) -> f64 {
    batch_index as f64 * stagger_ms
}
