//! Easing curves and the exponential smoothing step shared by the followers.

use glam::Vec2;

/// Easing curve mapping normalized time `t ∈ [0, 1]` to progress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    QuadOut,
    CubicOut,
    /// Overshoots by `s` before settling (classic "back" ease).
    BackOut(f32),
    /// Damped oscillation settling at 1.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                1.0 + u * u * ((s + 1.0) * u + s)
            }
            Easing::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let a = amplitude.max(1.0);
                let p = period.max(f32::EPSILON);
                let tau = std::f32::consts::TAU;
                let shift = p / tau * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * tau / p).sin() + 1.0
            }
        }
    }
}

/// One frame of the trailing-follower recurrence: `display += (target - display) / lag`.
///
/// `lag` below 1 would overshoot, so it is clamped to 1 (snap).
#[inline]
pub fn smooth_toward(display: Vec2, target: Vec2, lag: f32) -> Vec2 {
    display + (target - display) / lag.max(1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Single scalar animated between two values over a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct ScalarTween {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl ScalarTween {
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn value(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms) as f32;
        lerp(self.from, self.to, self.easing.apply(t))
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    /// Restart toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32, now_ms: f64, duration_ms: f64, easing: Easing) {
        if (to - self.to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.easing = easing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::QuadOut,
            Easing::CubicOut,
            Easing::BackOut(1.7),
            Easing::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            },
        ];
        for e in curves {
            assert!(e.apply(0.0).abs() < 1e-5, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-5, "{e:?} at 1");
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut tw = ScalarTween::settled(1.0);
        tw.retarget(3.0, 0.0, 100.0, Easing::Linear);
        assert!((tw.value(50.0) - 2.0).abs() < 1e-5);
        tw.retarget(0.0, 50.0, 100.0, Easing::Linear);
        assert!((tw.value(50.0) - 2.0).abs() < 1e-5);
        assert!((tw.value(150.0)).abs() < 1e-5);
    }
}
