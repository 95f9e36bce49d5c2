//! Property-based tests for the wind field using proptest
//!
//! Invariants checked over random leaf positions:
//! - Outside the wind strip, velocity is exactly zero after `apply`
//! - Inside, speed never increases with distance from the nozzle
//! - Velocities are always finite and bounded by the nozzle speed
//! - Residual decay follows v0 * (1 - t/T)

use glam::Vec2;
use leaf_blower::sim::{Bounds, Emitter, Particle, WindField};
use proptest::prelude::*;

const BASE_SPEED: f32 = 220.0;
const RANGE: f32 = 320.0;
const HALF_WIDTH: f32 = 72.0;
const MIN_FACTOR: f32 = 0.3;
const RESIDUAL: f32 = 2.0;
const NOZZLE_OFFSET: f32 = 43.2;

fn field() -> WindField {
    WindField::new(BASE_SPEED, RANGE, HALF_WIDTH, MIN_FACTOR, RESIDUAL)
}

fn emitter_at(pos: Vec2, active: bool, power: f32) -> Emitter {
    Emitter {
        pos,
        vel: Vec2::ZERO,
        facing: Vec2::NEG_X,
        power,
        active,
        speed: 260.0,
        ramp_secs: 1.0,
        nozzle_offset: NOZZLE_OFFSET,
        reach: Bounds::new(0.0, 800.0, 0.0, 600.0),
    }
}

/// Leaf positions anywhere in the arena
fn arena_position() -> impl Strategy<Value = Vec2> {
    (0.0f32..800.0, 0.0f32..600.0).prop_map(|(x, y)| Vec2::new(x, y))
}

/// Radial distances inside the range (excluding the zero guard)
fn in_range_distance() -> impl Strategy<Value = f32> {
    0.01f32..=RANGE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn outside_zone_is_still(
        positions in prop::collection::vec(arena_position(), 1..40),
        emitter_pos in arena_position(),
        power in 0.01f32..=1.0,
    ) {
        let mut wind = field();
        let emitter = emitter_at(emitter_pos, true, power);
        let nozzle = emitter.nozzle();
        let mut leaves: Vec<Particle> = positions
            .iter()
            .map(|&p| Particle { pos: p, vel: Vec2::new(123.0, -45.0), active: true })
            .collect();

        wind.apply(&mut leaves, &emitter, 1.0 / 60.0);

        for leaf in &leaves {
            prop_assert!(leaf.vel.is_finite());
            prop_assert!(leaf.vel.length() <= BASE_SPEED * power + 1e-3);
            if !wind.in_zone(leaf.pos, nozzle, Vec2::NEG_X) {
                prop_assert_eq!(leaf.vel, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn speed_non_increasing_with_distance(
        d1 in in_range_distance(),
        d2 in in_range_distance(),
        power in 0.01f32..=1.0,
    ) {
        let wind = field();
        // Origin nozzle keeps the offsets exact
        let nozzle = Vec2::ZERO;
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

        let v_near = wind.velocity_at(nozzle + Vec2::NEG_X * near, nozzle, Vec2::NEG_X, power);
        let v_far = wind.velocity_at(nozzle + Vec2::NEG_X * far, nozzle, Vec2::NEG_X, power);

        prop_assert!(v_near.length() >= v_far.length());
        // Never snaps to zero inside the zone
        prop_assert!(v_far.length() >= MIN_FACTOR * BASE_SPEED * power - 1e-3);
    }

    #[test]
    fn speed_depends_on_radial_not_forward_distance(
        forward in 1.0f32..200.0,
        side in 0.0f32..HALF_WIDTH,
    ) {
        let wind = field();
        let nozzle = Vec2::ZERO;
        let on_axis = wind.velocity_at(nozzle + Vec2::new(-forward, 0.0), nozzle, Vec2::NEG_X, 1.0);
        let off_axis = wind.velocity_at(nozzle + Vec2::new(-forward, side), nozzle, Vec2::NEG_X, 1.0);

        // Off-axis is farther from the nozzle, so never faster
        prop_assert!(off_axis.length() <= on_axis.length() + 1e-4);
        prop_assert_eq!(off_axis.y, 0.0);
    }

    #[test]
    fn residual_decay_is_linear(
        vx in -300.0f32..300.0,
        vy in -300.0f32..300.0,
        steps in 1usize..240,
    ) {
        let mut wind = field();
        wind.residual_remaining = RESIDUAL;
        let v0 = Vec2::new(vx, vy);
        let mut leaves = vec![Particle { pos: Vec2::new(50.0, 50.0), vel: v0, active: true }];
        let off = emitter_at(Vec2::new(400.0, 300.0), false, 0.0);

        let dt = 1.0 / 60.0;
        for _ in 0..steps {
            wind.apply(&mut leaves, &off, dt);
        }

        let t = steps as f32 * dt;
        let expected = if t >= RESIDUAL { Vec2::ZERO } else { v0 * (1.0 - t / RESIDUAL) };
        prop_assert!((leaves[0].vel - expected).length() < 0.05);
    }
}

#[test]
fn zero_distance_is_guarded() {
    let wind = field();
    let nozzle = Vec2::new(400.0, 300.0);
    let v = wind.velocity_at(nozzle, nozzle, Vec2::NEG_X, 1.0);
    assert_eq!(v, Vec2::ZERO);
}

#[test]
fn range_edge_keeps_min_factor() {
    let wind = field();
    let nozzle = Vec2::new(400.0, 300.0);
    let v = wind.velocity_at(nozzle + Vec2::new(-RANGE, 0.0), nozzle, Vec2::NEG_X, 1.0);
    assert!((v.length() - MIN_FACTOR * BASE_SPEED).abs() < 1e-3);
}
