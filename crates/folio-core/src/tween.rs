//! Frame-driven tween scheduler.
//!
//! Targets are opaque keys (DOM elements on the web). Each `animate` call
//! forms a group; the group's tag is reported once every track in it has
//! finished. Killing any track of a group makes the whole group inert.

use crate::constants::TILT_PERSPECTIVE_PX;
use crate::easing::{lerp, Easing};

/// Animatable style record. Translation in px, rotation in degrees.
///
/// `tilt_x`/`tilt_y` are the pointer-driven 3D tilt and render with a
/// perspective; `rotate_y` is the flat entrance spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate_y: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate_y: 0.0,
            tilt_x: 0.0,
            tilt_y: 0.0,
        }
    }
}

impl Style {
    pub fn transform_css(&self) -> String {
        let base = format!(
            "translate({:.2}px, {:.2}px) scale({:.3}) rotateY({:.2}deg)",
            self.x, self.y, self.scale, self.rotate_y
        );
        if self.tilt_x == 0.0 && self.tilt_y == 0.0 {
            return base;
        }
        format!(
            "perspective({}px) {} rotateX({:.2}deg) rotateY({:.2}deg)",
            TILT_PERSPECTIVE_PX, base, self.tilt_x, self.tilt_y
        )
    }

    /// Interpolate the properties named in `to` from `self`; everything
    /// else keeps its `current` value so concurrent tracks don't clobber
    /// each other.
    fn toward(&self, current: &Style, to: &StyleProps, t: f32) -> Style {
        let pick = |from: f32, now: f32, to: Option<f32>| to.map_or(now, |v| lerp(from, v, t));
        Style {
            opacity: pick(self.opacity, current.opacity, to.opacity),
            x: pick(self.x, current.x, to.x),
            y: pick(self.y, current.y, to.y),
            scale: pick(self.scale, current.scale, to.scale),
            rotate_y: pick(self.rotate_y, current.rotate_y, to.rotate_y),
            tilt_x: pick(self.tilt_x, current.tilt_x, to.tilt_x),
            tilt_y: pick(self.tilt_y, current.tilt_y, to.tilt_y),
        }
    }

    fn overlay(&self, props: &StyleProps) -> Style {
        self.toward(self, props, 1.0)
    }
}

/// Sparse set of style properties to animate toward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleProps {
    pub opacity: Option<f32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub rotate_y: Option<f32>,
    pub tilt_x: Option<f32>,
    pub tilt_y: Option<f32>,
}

impl StyleProps {
    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }
    pub fn x(mut self, v: f32) -> Self {
        self.x = Some(v);
        self
    }
    pub fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }
    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }
    pub fn rotate_y(mut self, v: f32) -> Self {
        self.rotate_y = Some(v);
        self
    }
    pub fn tilt(mut self, x: f32, y: f32) -> Self {
        self.tilt_x = Some(x);
        self.tilt_y = Some(y);
        self
    }

    /// True when both name at least one common property.
    pub fn overlaps(&self, other: &StyleProps) -> bool {
        (self.opacity.is_some() && other.opacity.is_some())
            || (self.x.is_some() && other.x.is_some())
            || (self.y.is_some() && other.y.is_some())
            || (self.scale.is_some() && other.scale.is_some())
            || (self.rotate_y.is_some() && other.rotate_y.is_some())
            || (self.tilt_x.is_some() && other.tilt_x.is_some())
            || (self.tilt_y.is_some() && other.tilt_y.is_some())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerFrom {
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub each_ms: f64,
    pub from: StaggerFrom,
}

impl Stagger {
    pub fn offset_ms(&self, index: usize, count: usize) -> f64 {
        match self.from {
            StaggerFrom::Start => self.each_ms * index as f64,
            StaggerFrom::Center => {
                let mid = (count.saturating_sub(1)) as f64 / 2.0;
                self.each_ms * (index as f64 - mid).abs()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenOptions {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub stagger: Option<Stagger>,
}

impl TweenOptions {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            easing,
            stagger: None,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger(mut self, each_ms: f64, from: StaggerFrom) -> Self {
        self.stagger = Some(Stagger { each_ms, from });
        self
    }
}

struct Track<K> {
    target: K,
    from: Option<Style>,
    to: StyleProps,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    group: u64,
}

struct Group<T> {
    id: u64,
    tag: Option<T>,
    remaining: usize,
    cancelled: bool,
}

pub struct TweenScheduler<K, T> {
    styles: Vec<(K, Style)>,
    dirty: Vec<K>,
    tracks: Vec<Track<K>>,
    groups: Vec<Group<T>>,
    next_group: u64,
}

impl<K: PartialEq + Clone, T> Default for TweenScheduler<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone, T> TweenScheduler<K, T> {
    pub fn new() -> Self {
        Self {
            styles: Vec::new(),
            dirty: Vec::new(),
            tracks: Vec::new(),
            groups: Vec::new(),
            next_group: 1,
        }
    }

    pub fn style_of(&self, target: &K) -> Style {
        self.styles
            .iter()
            .find(|(k, _)| k == target)
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    fn write_style(&mut self, target: &K, style: Style) {
        match self.styles.iter_mut().find(|(k, _)| k == target) {
            Some((_, s)) => *s = style,
            None => self.styles.push((target.clone(), style)),
        }
        if !self.dirty.contains(target) {
            self.dirty.push(target.clone());
        }
    }

    /// Apply `props` immediately; reported by the next `tick` or `flush`.
    pub fn set(&mut self, target: &K, props: StyleProps) {
        let next = self.style_of(target).overlay(&props);
        self.write_style(target, next);
    }

    /// Animate every target toward `props`. Returns the group id.
    ///
    /// An empty target list completes on the next `tick`.
    pub fn animate(
        &mut self,
        targets: &[K],
        props: StyleProps,
        opts: TweenOptions,
        tag: Option<T>,
        now_ms: f64,
    ) -> u64 {
        let id = self.next_group;
        self.next_group += 1;
        let count = targets.len();
        for (i, target) in targets.iter().enumerate() {
            let offset = opts.stagger.map_or(0.0, |s| s.offset_ms(i, count));
            self.tracks.push(Track {
                target: target.clone(),
                from: None,
                to: props,
                start_ms: now_ms + opts.delay_ms + offset,
                duration_ms: opts.duration_ms,
                easing: opts.easing,
                group: id,
            });
        }
        self.groups.push(Group {
            id,
            tag,
            remaining: count,
            cancelled: false,
        });
        id
    }

    /// Drop every in-flight tween on `target`. Their groups never complete.
    pub fn kill(&mut self, target: &K) -> usize {
        self.kill_where(target, |_| true)
    }

    /// Drop only the tweens on `target` that animate any of `props`.
    pub fn kill_props(&mut self, target: &K, props: &StyleProps) -> usize {
        self.kill_where(target, |to| to.overlaps(props))
    }

    fn kill_where(&mut self, target: &K, matches: impl Fn(&StyleProps) -> bool) -> usize {
        let mut killed = 0;
        let groups = &mut self.groups;
        self.tracks.retain(|t| {
            if &t.target == target && matches(&t.to) {
                if let Some(g) = groups.iter_mut().find(|g| g.id == t.group) {
                    g.cancelled = true;
                    g.remaining = g.remaining.saturating_sub(1);
                }
                killed += 1;
                false
            } else {
                true
            }
        });
        self.groups.retain(|g| !(g.cancelled && g.remaining == 0));
        killed
    }

    /// Kill and drop all bookkeeping for a target that left the document.
    pub fn forget(&mut self, target: &K) {
        self.kill(target);
        self.styles.retain(|(k, _)| k != target);
        self.dirty.retain(|k| k != target);
    }

    pub fn is_animating(&self, target: &K) -> bool {
        self.tracks.iter().any(|t| &t.target == target)
    }

    pub fn active_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Advance all tracks. Changed styles go to `styles_out`, tags of groups
    /// that finished this tick go to `done_out`.
    pub fn tick(&mut self, now_ms: f64, styles_out: &mut Vec<(K, Style)>, done_out: &mut Vec<T>) {
        let mut finished: Vec<u64> = Vec::new();
        let mut i = 0;
        while i < self.tracks.len() {
            if now_ms < self.tracks[i].start_ms {
                i += 1;
                continue;
            }
            let target = self.tracks[i].target.clone();
            let current = self.style_of(&target);
            let from = *self.tracks[i].from.get_or_insert(current);
            let track = &self.tracks[i];
            let t = if track.duration_ms <= 0.0 {
                1.0
            } else {
                ((now_ms - track.start_ms) / track.duration_ms).min(1.0) as f32
            };
            let style = from.toward(&current, &track.to, track.easing.apply(t));
            self.write_style(&target, style);
            if t >= 1.0 {
                let done = self.tracks.swap_remove(i);
                finished.push(done.group);
            } else {
                i += 1;
            }
        }
        for gid in finished {
            if let Some(g) = self.groups.iter_mut().find(|g| g.id == gid) {
                g.remaining = g.remaining.saturating_sub(1);
            }
        }
        let mut idx = 0;
        while idx < self.groups.len() {
            if self.groups[idx].remaining == 0 {
                let g = self.groups.remove(idx);
                if let (false, Some(tag)) = (g.cancelled, g.tag) {
                    done_out.push(tag);
                }
            } else {
                idx += 1;
            }
        }
        self.flush(styles_out);
    }

    /// Report styles changed since the last report without advancing time.
    pub fn flush(&mut self, styles_out: &mut Vec<(K, Style)>) {
        for k in self.dirty.drain(..) {
            if let Some((_, s)) = self.styles.iter().find(|(t, _)| *t == k) {
                styles_out.push((k, *s));
            }
        }
    }
}
