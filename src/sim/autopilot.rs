//! Demo autopilot
//!
//! Picks the nearest leaf still on the floor, parks the blower so the nozzle
//! sits a little behind it, and blows while the leaf is in the wind strip.

use glam::Vec2;

use super::state::Simulation;
use super::tick::TickInput;

/// Distance the nozzle keeps behind the target leaf (cells)
const LEAD_CELLS: f32 = 0.25;
/// Per-axis dead zone to avoid jitter around the target (pixels)
const ALIGN_TOLERANCE: f32 = 6.0;

/// Input a simple player would give this frame
pub fn autopilot_input(sim: &Simulation) -> TickInput {
    if sim.phase.is_terminal() {
        return TickInput::default();
    }

    let emitter = &sim.emitter;
    let dir = emitter.facing.normalize_or_zero();
    let lead = sim.layout.cell.x * LEAD_CELLS;

    // Where the blower has to stand to blow a leaf at `pos`
    let park_for = |pos: Vec2| pos - dir * (lead + emitter.nozzle_offset);
    let reachable = |pos: Vec2| {
        let target = park_for(pos);
        emitter.reach.clamp_point(target).distance(target) <= ALIGN_TOLERANCE
    };
    let nearest = |reachable_only: bool| {
        sim.particles
            .iter()
            .filter(|p| p.active && sim.layout.floor.contains_point(p.pos))
            .filter(|p| !reachable_only || reachable(p.pos))
            .min_by(|a, b| {
                let da = a.pos.distance_squared(emitter.pos);
                let db = b.pos.distance_squared(emitter.pos);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|p| p.pos)
    };

    let Some(target) = nearest(true).or_else(|| nearest(false)) else {
        return TickInput::default();
    };

    let delta = emitter.reach.clamp_point(park_for(target)) - emitter.pos;
    let activate = sim.wind.in_zone(target, emitter.nozzle(), dir)
        && target.distance(emitter.nozzle()) > 0.0;

    TickInput {
        left: delta.x < -ALIGN_TOLERANCE,
        right: delta.x > ALIGN_TOLERANCE,
        up: delta.y < -ALIGN_TOLERANCE,
        down: delta.y > ALIGN_TOLERANCE,
        activate,
    }
}
