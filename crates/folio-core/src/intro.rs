//! Hero intro: the typed-out title and the scroll parallax of the
//! background shapes.

use crate::constants::{
    PARALLAX_BACKGROUND_RATE, PARALLAX_SHAPE_BASE, PARALLAX_SHAPE_SPIN, PARALLAX_SHAPE_STEP,
    TYPE_CARET_LINGER_MS, TYPE_STEP_MS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeUpdate {
    /// Show this prefix of the title, caret after it.
    Text(String),
    /// Typing finished a while ago; drop the caret.
    CaretDone,
}

/// Reveals a title one character per step, starting at `start_ms`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    start_ms: f64,
    step_ms: f64,
    shown: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(text: &str, start_ms: f64) -> Self {
        Self::with_step(text, start_ms, TYPE_STEP_MS)
    }

    pub fn with_step(text: &str, start_ms: f64, step_ms: f64) -> Self {
        Self {
            chars: text.chars().collect(),
            start_ms,
            step_ms: step_ms.max(1.0),
            shown: 0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// What changed by `now_ms`, if anything. Late polls catch up in one go.
    pub fn poll(&mut self, now_ms: f64) -> Option<TypeUpdate> {
        if self.finished || now_ms < self.start_ms {
            return None;
        }
        let len = self.chars.len();
        let due = (((now_ms - self.start_ms) / self.step_ms).floor() as usize + 1).min(len);
        if due > self.shown {
            self.shown = due;
            return Some(TypeUpdate::Text(self.chars[..due].iter().collect()));
        }
        let typed_at = self.start_ms + len.saturating_sub(1) as f64 * self.step_ms;
        if now_ms >= typed_at + TYPE_CARET_LINGER_MS {
            self.finished = true;
            return Some(TypeUpdate::CaretDone);
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeOffset {
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl ShapeOffset {
    pub fn transform_css(&self) -> String {
        format!(
            "translateY({:.1}px) rotate({:.1}deg)",
            self.translate_y, self.rotate_deg
        )
    }
}

/// Offset of the `index`-th hero shape after scrolling `scrolled` px.
/// Later shapes drift faster, which gives the layered depth.
pub fn shape_parallax(scrolled: f64, index: usize) -> ShapeOffset {
    let speed = PARALLAX_SHAPE_BASE + index as f64 * PARALLAX_SHAPE_STEP;
    ShapeOffset {
        translate_y: scrolled * speed,
        rotate_deg: scrolled * PARALLAX_SHAPE_SPIN,
    }
}

/// Vertical offset of the hero background; it moves against the scroll.
#[inline]
pub fn background_parallax(scrolled: f64) -> f64 {
    scrolled * PARALLAX_BACKGROUND_RATE
}
