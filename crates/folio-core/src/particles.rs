//! Hero background particles: constant velocity, elastic walls, optional
//! pointer attraction, and proximity links for drawing.

use glam::Vec2;
use rand::Rng;

use crate::constants::{
    ATTRACTION_MAX_SPEED, ATTRACTION_RADIUS, ATTRACTION_STRENGTH, LINK_DISTANCE, LINK_MAX_ALPHA,
    PARTICLE_AREA_PER, PARTICLE_CAP, PARTICLE_COLORS, PARTICLE_MAX_AXIS_SPEED,
    PARTICLE_MIN_OPACITY, PARTICLE_MIN_RADIUS, PARTICLE_OPACITY_SPAN, PARTICLE_RADIUS_SPAN,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: usize,
    pub opacity: f32,
}

impl Particle {
    pub fn color_hex(&self) -> &'static str {
        PARTICLE_COLORS[self.color % PARTICLE_COLORS.len()]
    }
}

/// Pull toward the pointer, strongest at the pointer and zero at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attraction {
    pub radius: f32,
    pub strength: f32,
    pub max_speed: f32,
}

impl Default for Attraction {
    fn default() -> Self {
        Self {
            radius: ATTRACTION_RADIUS,
            strength: ATTRACTION_STRENGTH,
            max_speed: ATTRACTION_MAX_SPEED,
        }
    }
}

impl Attraction {
    /// Velocity delta for a particle at `pos` with the pointer at `pointer`.
    pub fn impulse(&self, pos: Vec2, pointer: Vec2) -> Vec2 {
        let delta = pointer - pos;
        let dist = delta.length();
        if dist >= self.radius || dist <= f32::EPSILON {
            return Vec2::ZERO;
        }
        let falloff = 1.0 - dist / self.radius;
        delta / dist * self.strength * falloff
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Particle budget for a viewport: one per `PARTICLE_AREA_PER` px², capped.
pub fn particle_count(viewport_w: f64, viewport_h: f64) -> usize {
    let by_area = (viewport_w.max(0.0) * viewport_h.max(0.0) / PARTICLE_AREA_PER).floor() as usize;
    by_area.min(PARTICLE_CAP)
}

/// Link opacity for two particles `distance` apart; zero at or beyond `max`.
#[inline]
pub fn link_alpha(distance: f32, max: f32) -> f32 {
    if distance >= max {
        0.0
    } else {
        LINK_MAX_ALPHA * (1.0 - distance / max)
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    attraction: Option<Attraction>,
}

impl ParticleField {
    pub fn new(bounds: Vec2, attraction: Option<Attraction>) -> Self {
        Self {
            particles: Vec::new(),
            bounds,
            attraction,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn push(&mut self, p: Particle) {
        self.particles.push(p);
    }

    /// Replace the population with `count` random particles inside the bounds.
    pub fn seed<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count.min(PARTICLE_CAP) {
            let pos = Vec2::new(
                rng.gen::<f32>() * self.bounds.x,
                rng.gen::<f32>() * self.bounds.y,
            );
            let vel = Vec2::new(
                rng.gen_range(-PARTICLE_MAX_AXIS_SPEED..PARTICLE_MAX_AXIS_SPEED),
                rng.gen_range(-PARTICLE_MAX_AXIS_SPEED..PARTICLE_MAX_AXIS_SPEED),
            );
            self.particles.push(Particle {
                pos,
                vel,
                radius: PARTICLE_MIN_RADIUS + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
                color: rng.gen_range(0..PARTICLE_COLORS.len()),
                opacity: PARTICLE_MIN_OPACITY + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            });
        }
    }

    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// One simulation step. `pointer` is only consulted with attraction on.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            if let (Some(attr), Some(ptr)) = (self.attraction, pointer) {
                p.vel += attr.impulse(p.pos, ptr);
                p.vel = p.vel.clamp_length_max(attr.max_speed);
            }
            p.pos += p.vel;
            // Reverse only when heading further out, so a particle that ends
            // up outside after a resize walks back in instead of jittering.
            if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > bounds.x && p.vel.x > 0.0) {
                p.vel.x = -p.vel.x;
            }
            if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > bounds.y && p.vel.y > 0.0) {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Pairs closer than `LINK_DISTANCE`, with their draw opacity.
    pub fn links(&self, out: &mut Vec<Link>) {
        out.clear();
        let max_sq = LINK_DISTANCE * LINK_DISTANCE;
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d_sq = a.pos.distance_squared(b.pos);
                if d_sq < max_sq {
                    out.push(Link {
                        a: i,
                        b: j,
                        alpha: link_alpha(d_sq.sqrt(), LINK_DISTANCE),
                    });
                }
            }
        }
    }
}
