// Host-side tests for the hero particle field.

use folio_core::constants::{LINK_DISTANCE, LINK_MAX_ALPHA, PARTICLE_CAP};
use folio_core::particles::{link_alpha, particle_count, Attraction, Particle, ParticleField};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn particle(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        radius: 2.0,
        color: 0,
        opacity: 0.5,
    }
}

#[test]
fn count_scales_with_area_and_caps() {
    assert_eq!(particle_count(800.0, 600.0), 60);
    assert_eq!(particle_count(1920.0, 1080.0), PARTICLE_CAP);
    assert_eq!(particle_count(100.0, 50.0), 0);
    assert_eq!(particle_count(-10.0, 600.0), 0);
}

#[test]
fn seeded_particles_respect_ranges() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut field = ParticleField::new(Vec2::new(800.0, 600.0), None);
    field.seed(60, &mut rng);
    assert_eq!(field.particles().len(), 60);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        assert!(p.vel.x.abs() <= 1.5 && p.vel.y.abs() <= 1.5);
        assert!(p.radius >= 1.0 && p.radius <= 6.0);
        assert!(p.opacity >= 0.1 && p.opacity <= 0.6);
        assert!(p.color_hex().starts_with('#'));
    }
}

#[test]
fn seeding_twice_replaces_population() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut field = ParticleField::new(Vec2::new(400.0, 400.0), None);
    field.seed(10, &mut rng);
    field.seed(4, &mut rng);
    assert_eq!(field.particles().len(), 4);
    field.seed(500, &mut rng);
    assert_eq!(field.particles().len(), PARTICLE_CAP);
}

#[test]
fn particles_move_at_constant_velocity() {
    let mut field = ParticleField::new(Vec2::new(100.0, 100.0), None);
    field.push(particle(Vec2::new(50.0, 50.0), Vec2::new(1.0, -0.5)));
    field.step(None);
    field.step(None);
    assert_eq!(field.particles()[0].pos, Vec2::new(52.0, 49.0));
    assert_eq!(field.particles()[0].vel, Vec2::new(1.0, -0.5));
}

#[test]
fn walls_reflect_velocity() {
    let mut field = ParticleField::new(Vec2::new(100.0, 100.0), None);
    field.push(particle(Vec2::new(99.5, 50.0), Vec2::new(1.0, 0.0)));
    field.push(particle(Vec2::new(50.0, 0.5), Vec2::new(0.0, -1.0)));
    field.step(None);
    assert_eq!(field.particles()[0].vel.x, -1.0);
    assert_eq!(field.particles()[1].vel.y, 1.0);

    // Heads back inside on the next step.
    field.step(None);
    assert!(field.particles()[0].pos.x < 100.0);
    assert!(field.particles()[1].pos.y > 0.0);
}

#[test]
fn particle_outside_after_shrink_walks_back_in() {
    let mut field = ParticleField::new(Vec2::new(200.0, 200.0), None);
    field.push(particle(Vec2::new(150.0, 50.0), Vec2::new(-1.0, 0.0)));
    field.resize(Vec2::new(100.0, 200.0));
    for _ in 0..10 {
        field.step(None);
    }
    // Already heading inward, so the velocity is never flipped.
    assert_eq!(field.particles()[0].vel.x, -1.0);
    assert_eq!(field.particles()[0].pos.x, 140.0);
}

#[test]
fn link_alpha_fades_with_distance() {
    assert!((link_alpha(0.0, LINK_DISTANCE) - LINK_MAX_ALPHA).abs() < 1e-6);
    assert!((link_alpha(50.0, LINK_DISTANCE) - LINK_MAX_ALPHA / 2.0).abs() < 1e-6);
    assert_eq!(link_alpha(LINK_DISTANCE, LINK_DISTANCE), 0.0);
    assert_eq!(link_alpha(250.0, LINK_DISTANCE), 0.0);
}

#[test]
fn links_only_between_close_pairs() {
    let mut field = ParticleField::new(Vec2::new(500.0, 500.0), None);
    field.push(particle(Vec2::new(0.0, 0.0), Vec2::ZERO));
    field.push(particle(Vec2::new(30.0, 40.0), Vec2::ZERO));
    field.push(particle(Vec2::new(400.0, 400.0), Vec2::ZERO));
    let mut links = Vec::new();
    field.links(&mut links);
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].a, links[0].b), (0, 1));
    assert!((links[0].alpha - link_alpha(50.0, LINK_DISTANCE)).abs() < 1e-6);
}

#[test]
fn attraction_pulls_toward_pointer_within_radius() {
    let attr = Attraction::default();
    let near = attr.impulse(Vec2::new(0.0, 0.0), Vec2::new(60.0, 0.0));
    assert!(near.x > 0.0 && near.y == 0.0);
    let nearer = attr.impulse(Vec2::new(30.0, 0.0), Vec2::new(60.0, 0.0));
    assert!(nearer.x > near.x);
    assert_eq!(attr.impulse(Vec2::ZERO, Vec2::new(500.0, 0.0)), Vec2::ZERO);
    assert_eq!(attr.impulse(Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn attraction_speed_is_capped() {
    let attr = Attraction {
        strength: 10.0,
        ..Attraction::default()
    };
    let mut field = ParticleField::new(Vec2::new(500.0, 500.0), Some(attr));
    field.push(particle(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)));
    for _ in 0..5 {
        field.step(Some(Vec2::new(150.0, 100.0)));
    }
    assert!(field.particles()[0].vel.length() <= attr.max_speed + 1e-4);

    // No pointer: the field keeps its velocity.
    let v = field.particles()[0].vel;
    field.step(None);
    assert_eq!(field.particles()[0].vel, v);
}
