//! Pointer follower engine: an instant dot plus a trailing outline.
//!
//! Hover, press and scroll are independent flags. The visual preset is derived
//! from them on every change, with press taking precedence for scale and a
//! deferred revert while a press or scroll outlives the hover.

use glam::Vec2;

use crate::constants::{
    CLICK_AWAY_RESET_MS, LAG_FACTOR, NORMAL_OUTLINE_PX, SCALE_TWEEN_MS, SCROLL_IDLE_MS,
};
use crate::easing::{smooth_toward, Easing, ScalarTween};
use crate::timing::Debounce;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMode {
    Idle,
    Hovering,
    Pressed,
    Scrolling,
}

/// Kinds of interactive element with their own follower preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractiveKind {
    Link,
    GalleryCard,
    CallToAction,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualPreset {
    pub dot_scale: f32,
    pub outline_scale: f32,
    pub dot_color: Option<&'static str>,
    pub outline_color: Option<&'static str>,
    pub outline_px: f32,
}

pub const NORMAL_PRESET: VisualPreset = VisualPreset {
    dot_scale: 1.0,
    outline_scale: 1.0,
    dot_color: None,
    outline_color: None,
    outline_px: NORMAL_OUTLINE_PX,
};

const PRESS_DOT_SCALE: f32 = 2.8;
const PRESS_OUTLINE_SCALE: f32 = 0.4;

impl InteractiveKind {
    /// Classify an interactive element by its `class` attribute.
    pub fn from_class_list(classes: &str) -> Self {
        let mut words = classes.split_whitespace();
        if words.clone().any(|c| c == "portfolio-item") {
            InteractiveKind::GalleryCard
        } else if words.any(|c| c == "cta-button" || c == "btn-primary") {
            InteractiveKind::CallToAction
        } else {
            InteractiveKind::Link
        }
    }

    pub fn preset(self) -> VisualPreset {
        match self {
            InteractiveKind::Link => VisualPreset {
                dot_scale: 2.5,
                outline_scale: 0.5,
                ..NORMAL_PRESET
            },
            InteractiveKind::GalleryCard => VisualPreset {
                dot_scale: 2.5,
                outline_scale: 0.5,
                dot_color: Some("#fd79a8"),
                outline_color: Some("#fd79a8"),
                outline_px: 80.0,
            },
            InteractiveKind::CallToAction => VisualPreset {
                dot_scale: 3.0,
                outline_scale: 0.5,
                dot_color: Some("#00b894"),
                ..NORMAL_PRESET
            },
        }
    }
}

/// Everything the host needs to paint both followers for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerFrame {
    pub dot: Vec2,
    pub outline: Vec2,
    pub dot_scale: f32,
    pub outline_scale: f32,
    pub preset: VisualPreset,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub target: Vec2,
    pub display: Vec2,
    pub hovering: Option<InteractiveKind>,
    pub pressed: bool,
    pub scrolling: bool,
    pub visible: bool,
    seeded: bool,
}

impl PointerState {
    pub fn mode(&self) -> PointerMode {
        if self.pressed {
            PointerMode::Pressed
        } else if self.hovering.is_some() {
            PointerMode::Hovering
        } else if self.scrolling {
            PointerMode::Scrolling
        } else {
            PointerMode::Idle
        }
    }
}

pub struct PointerEngine {
    state: PointerState,
    lag_factor: f32,
    // Hover preset kept alive after leave until press and scroll both end.
    sticky: Option<InteractiveKind>,
    scroll_idle: Debounce,
    click_reset: Debounce,
    dot_scale: ScalarTween,
    outline_scale: ScalarTween,
    preset: VisualPreset,
    disabled: bool,
}

impl Default for PointerEngine {
    fn default() -> Self {
        Self::new(LAG_FACTOR)
    }
}

impl PointerEngine {
    pub fn new(lag_factor: f32) -> Self {
        Self {
            state: PointerState::default(),
            lag_factor: lag_factor.max(1.0),
            sticky: None,
            scroll_idle: Debounce::new(SCROLL_IDLE_MS),
            click_reset: Debounce::new(CLICK_AWAY_RESET_MS),
            dot_scale: ScalarTween::settled(1.0),
            outline_scale: ScalarTween::settled(1.0),
            preset: NORMAL_PRESET,
            disabled: false,
        }
    }

    /// Engine for touch devices: ignores every input and never paints.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn mode(&self) -> PointerMode {
        self.state.mode()
    }

    pub fn preset(&self) -> VisualPreset {
        self.preset
    }

    pub fn lag_factor(&self) -> f32 {
        self.lag_factor
    }

    /// Start both followers at the viewport centre before the first move.
    pub fn center_in(&mut self, width: f32, height: f32) {
        let c = Vec2::new(width / 2.0, height / 2.0);
        self.state.target = c;
        self.state.display = c;
    }

    /// Returns the primary (untrailed) follower position.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Vec2> {
        if self.disabled {
            return None;
        }
        self.state.target = Vec2::new(x, y);
        if !self.state.seeded {
            self.state.display = self.state.target;
            self.state.seeded = true;
        }
        self.state.visible = true;
        Some(self.state.target)
    }

    pub fn on_pointer_leave_window(&mut self) {
        self.state.visible = false;
    }

    pub fn on_pointer_enter_window(&mut self) {
        if !self.disabled {
            self.state.visible = true;
        }
    }

    /// Re-centre on resize unless the pointer is on screen.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        if !self.state.visible {
            self.center_in(width, height);
        }
    }

    pub fn on_enter_interactive(&mut self, kind: InteractiveKind, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.state.hovering = Some(kind);
        self.sticky = Some(kind);
        self.click_reset.cancel();
        self.refresh(now_ms);
    }

    pub fn on_leave_interactive(&mut self, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.state.hovering = None;
        self.settle_sticky();
        self.refresh(now_ms);
    }

    pub fn on_press_start(&mut self, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.state.pressed = true;
        self.refresh(now_ms);
    }

    pub fn on_press_end(&mut self, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.state.pressed = false;
        self.settle_sticky();
        self.refresh(now_ms);
    }

    pub fn on_scroll_activity(&mut self, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.state.scrolling = true;
        self.scroll_idle.trigger(now_ms);
    }

    /// Click on a non-interactive element: fall back to normal shortly after,
    /// unless something else is still holding the preset.
    pub fn on_click_away(&mut self, now_ms: f64) {
        if self.disabled {
            return;
        }
        self.click_reset.trigger(now_ms);
    }

    fn settle_sticky(&mut self) {
        if self.state.hovering.is_none() && !self.state.pressed && !self.state.scrolling {
            self.sticky = None;
        }
    }

    fn resolved_preset(&self) -> VisualPreset {
        let base = self
            .state
            .hovering
            .or(self.sticky)
            .map_or(NORMAL_PRESET, InteractiveKind::preset);
        if self.state.pressed {
            VisualPreset {
                dot_scale: PRESS_DOT_SCALE,
                outline_scale: PRESS_OUTLINE_SCALE,
                ..base
            }
        } else {
            base
        }
    }

    fn refresh(&mut self, now_ms: f64) {
        let next = self.resolved_preset();
        if next != self.preset {
            log::debug!("[cursor] preset {:?} -> {:?}", self.mode(), next);
        }
        self.preset = next;
        self.dot_scale
            .retarget(next.dot_scale, now_ms, SCALE_TWEEN_MS, Easing::QuadOut);
        self.outline_scale
            .retarget(next.outline_scale, now_ms, SCALE_TWEEN_MS, Easing::QuadOut);
    }

    /// Frame tick: advance the trailing follower and expire timers.
    pub fn tick(&mut self, now_ms: f64) -> Option<FollowerFrame> {
        if self.disabled {
            return None;
        }
        if self.scroll_idle.poll(now_ms) {
            self.state.scrolling = false;
            self.settle_sticky();
            self.refresh(now_ms);
        }
        if self.click_reset.poll(now_ms) && !self.state.scrolling && !self.state.pressed {
            self.state.hovering = None;
            self.sticky = None;
            self.refresh(now_ms);
        }
        self.state.display = smooth_toward(self.state.display, self.state.target, self.lag_factor);
        Some(FollowerFrame {
            dot: self.state.target,
            outline: self.state.display,
            dot_scale: self.dot_scale.value(now_ms),
            outline_scale: self.outline_scale.value(now_ms),
            preset: self.preset,
            visible: self.state.visible,
        })
    }
}
