//! Per-frame simulation tick
//!
//! Order each tick: blower moves → power ramps → wind sets leaf velocities →
//! leaves move → floor cleanliness → clock and round outcome.

use glam::Vec2;

use super::clean::is_clean;
use super::state::{GameEvent, RoundState, Simulation};

/// Control signals for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Blow button held
    pub activate: bool,
}

impl TickInput {
    /// Movement axis, -1/0/1 per component. Left beats right, up beats down.
    pub fn axis(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Advance the round by `dt` seconds of frame time.
///
/// Does nothing once the round is over, or for a zero/negative/non-finite `dt`.
pub fn tick(sim: &mut Simulation, input: &TickInput, dt: f32) {
    if sim.phase.is_terminal() {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    if dt == 0.0 {
        return;
    }

    sim.events.clear();
    sim.time_ticks += 1;

    // Blower
    sim.emitter.steer(input.axis(), dt);
    let was_on = sim.emitter.active;
    sim.emitter.update_power(input.activate, dt);
    if sim.emitter.active != was_on {
        log::debug!("Blower {}", if sim.emitter.active { "on" } else { "off" });
        sim.events.push(GameEvent::BlowerToggled {
            on: sim.emitter.active,
        });
    }

    // Wind, then motion
    sim.wind.apply(&mut sim.particles, &sim.emitter, dt);
    let arena = sim.layout.arena;
    for particle in &mut sim.particles {
        particle.integrate(dt, &arena);
    }

    // Post-movement cleanliness, so a leaf leaving on the last tick counts
    sim.clean = is_clean(&sim.particles, &sim.layout.floor);
    sim.report_clean_state();

    // Win beats a simultaneous timeout
    if sim.clean {
        sim.finish(RoundState::Won);
        return;
    }
    if sim.clock.advance(dt) {
        sim.finish(RoundState::Lost);
    }
}
