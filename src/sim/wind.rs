//! Blower wind field
//!
//! While blowing, each leaf's velocity is a pure function of where it sits
//! relative to the nozzle:
//! - outside the wind strip: zero
//! - inside: along the emission direction, fastest at the nozzle and falling
//!   off linearly with radial distance to `min_factor` at the end of the range
//!
//! After the blower stops, existing velocities decay linearly to zero over
//! the residual window, then are held at zero.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::FloorLayout;
use super::state::{Emitter, Particle};
use crate::config::RoundConfig;

/// Wind parameters plus the residual-wind timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindField {
    /// Speed at the nozzle at full power
    pub base_speed: f32,
    /// Reach along the emission direction
    pub range: f32,
    /// Half thickness of the strip, perpendicular to the emission direction
    pub half_width: f32,
    /// Speed fraction kept at the end of the range
    pub min_factor: f32,
    /// Full residual window (seconds)
    pub residual_secs: f32,
    /// Residual window left (seconds)
    pub residual_remaining: f32,
}

impl WindField {
    pub fn new(base_speed: f32, range: f32, half_width: f32, min_factor: f32, residual_secs: f32) -> Self {
        Self {
            base_speed,
            range,
            half_width,
            min_factor: min_factor.clamp(0.0, 1.0),
            residual_secs,
            residual_remaining: 0.0,
        }
    }

    pub fn from_config(config: &RoundConfig, layout: &FloorLayout) -> Self {
        Self::new(
            config.wind_base_speed,
            layout.cell.x * config.wind_range_cells,
            layout.cell.y * config.wind_half_width_cells,
            config.wind_min_factor,
            config.residual_wind_secs,
        )
    }

    /// Inside the strip: `0 <= forward <= range` and `|sideways| <= half_width`
    pub fn in_zone(&self, pos: Vec2, nozzle: Vec2, dir: Vec2) -> bool {
        let rel = pos - nozzle;
        let forward = rel.dot(dir);
        if !(0.0..=self.range).contains(&forward) {
            return false;
        }
        let sideways = rel.dot(dir.perp()).abs();
        sideways <= self.half_width
    }

    /// 1.0 at the nozzle down to `min_factor` at `range`
    pub fn distance_factor(&self, radial: f32) -> f32 {
        let normalized = (radial / self.range).clamp(0.0, 1.0);
        self.min_factor + (1.0 - self.min_factor) * (1.0 - normalized)
    }

    /// Velocity a leaf at `pos` gets while the blower runs at `power`
    pub fn velocity_at(&self, pos: Vec2, nozzle: Vec2, dir: Vec2, power: f32) -> Vec2 {
        if !self.in_zone(pos, nozzle, dir) {
            return Vec2::ZERO;
        }
        let radial = pos.distance(nozzle);
        // Sitting on the nozzle, or in a strip corner past the range
        if radial <= 0.0 || radial > self.range {
            return Vec2::ZERO;
        }
        dir * self.base_speed * power * self.distance_factor(radial)
    }

    /// Active phase: recompute every velocity from position and refresh
    /// the residual window. Inactive: decay what's left, zero once expired.
    pub fn apply(&mut self, particles: &mut [Particle], emitter: &Emitter, dt: f32) {
        let dt = dt.max(0.0);

        if emitter.active {
            self.residual_remaining = self.residual_secs;
        }

        let dir = emitter.facing.normalize_or_zero();
        if emitter.active && emitter.power > 0.0 && dir != Vec2::ZERO {
            let nozzle = emitter.nozzle();
            for particle in particles.iter_mut() {
                particle.vel = self.velocity_at(particle.pos, nozzle, dir, emitter.power);
            }
            return;
        }

        if self.residual_remaining > 0.0 {
            let before = self.residual_remaining;
            self.residual_remaining = (before - dt).max(0.0);
            // Per-tick ratio so the total decay is v0 * remaining / full
            let factor = self.residual_remaining / before;
            for particle in particles.iter_mut() {
                particle.vel *= factor;
            }
        }

        if !emitter.active && self.residual_remaining <= 0.0 {
            for particle in particles.iter_mut() {
                particle.vel = Vec2::ZERO;
            }
        }
    }

    /// Residual fraction left (1.0 right after blowing, 0.0 when calm)
    pub fn residual_fraction(&self) -> f32 {
        if self.residual_secs > 0.0 {
            (self.residual_remaining / self.residual_secs).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Cut the wind immediately
    pub fn stop(&mut self) {
        self.residual_remaining = 0.0;
    }
}
