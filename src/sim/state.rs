//! Round state and core simulation types
//!
//! A `Simulation` is one complete round. Restarting builds a new one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, FloorLayout};
use super::clean::is_clean;
use super::clock::RoundClock;
use super::wind::WindField;
use crate::config::RoundConfig;
use crate::error::ConfigError;

/// Outcome of the round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Timer running, leaves still on the floor
    Running,
    /// Floor cleaned before time ran out
    Won,
    /// Time ran out with leaves on the floor
    Lost,
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::Running)
    }
}

/// Notable state changes, for loggers and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cleanliness differs from the last reported value
    FloorCleanChanged { clean: bool },
    /// Blower switched on or off
    BlowerToggled { on: bool },
    RoundWon { remaining: f32 },
    RoundLost,
}

/// A leaf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Inactive leaves are ignored by the cleanliness check
    pub active: bool,
}

impl Particle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            active: true,
        }
    }

    /// Explicit Euler step, kept inside the arena
    pub fn integrate(&mut self, dt: f32, arena: &Bounds) {
        self.pos = arena.clamp_point(self.pos + self.vel * dt);
    }
}

/// The player's leaf blower
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Emission direction (unit, constant)
    pub facing: Vec2,
    /// 0..1, ramps up while blowing
    pub power: f32,
    /// Blow button held this tick
    pub active: bool,
    /// Movement speed per axis (pixels/s)
    pub speed: f32,
    /// Seconds from 0 to full power
    pub ramp_secs: f32,
    /// Distance from the center to the nozzle along `facing`
    pub nozzle_offset: f32,
    /// Region the blower center is clamped into
    pub reach: Bounds,
}

impl Emitter {
    /// Where the air comes out
    #[inline]
    pub fn nozzle(&self) -> Vec2 {
        self.pos + self.facing * self.nozzle_offset
    }

    /// Move along `axis` (components in -1..=1, not normalized) and clamp
    pub fn steer(&mut self, axis: Vec2, dt: f32) {
        self.vel = axis * self.speed;
        self.pos = self.reach.clamp_point(self.pos + self.vel * dt);
    }

    /// Ramp power while held, drop to zero instantly on release
    pub fn update_power(&mut self, held: bool, dt: f32) {
        self.active = held;
        if held {
            self.power = (self.power + dt / self.ramp_secs).clamp(0.0, 1.0);
        } else {
            self.power = 0.0;
        }
    }

    /// Freeze (round over)
    pub fn stop(&mut self) {
        self.vel = Vec2::ZERO;
        self.power = 0.0;
        self.active = false;
    }
}

/// Read-only view for renderers and UI, taken between ticks
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub emitter: Vec2,
    pub nozzle: Vec2,
    pub power: f32,
    pub particles: Vec<Vec2>,
    pub remaining: f32,
    pub total: f32,
    /// Remaining share of the round, for a time bar
    pub time_fraction: f32,
    /// `M:SS`
    pub clock_label: String,
    /// Residual wind strength, 1 right after release
    pub residual: f32,
    pub clean: bool,
    pub on_floor: usize,
    pub ticks: u64,
}

/// One complete round
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed used to scatter the leaf pile
    pub seed: u64,
    pub config: RoundConfig,
    pub layout: FloorLayout,
    pub phase: RoundState,
    pub particles: Vec<Particle>,
    pub emitter: Emitter,
    pub wind: WindField,
    pub clock: RoundClock,
    /// Cleanliness as of the last tick
    pub clean: bool,
    /// Ticks that advanced the round
    pub time_ticks: u64,
    pub(super) last_reported_clean: Option<bool>,
    pub(super) events: Vec<GameEvent>,
}

impl Simulation {
    /// Validate `config` and set up a fresh round
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// A brand-new round with the same config and a new pile
    pub fn restart(&self, seed: u64) -> Self {
        Self::build(self.config.clone(), seed)
    }

    fn build(config: RoundConfig, seed: u64) -> Self {
        let layout = FloorLayout::new(&config);
        let floor = layout.floor;
        let cell = layout.cell;

        let particles = scatter_pile(&config, &layout, seed);

        let reach = floor.inset(
            cell.x * config.emitter_margin_cells,
            cell.y * config.emitter_margin_cells,
        );
        let start = Vec2::new(
            floor.center().x,
            floor.bottom - cell.y * config.emitter_start_offset_cells,
        );
        let emitter = Emitter {
            pos: reach.clamp_point(start),
            vel: Vec2::ZERO,
            facing: Vec2::NEG_X,
            power: 0.0,
            active: false,
            speed: config.emitter_speed,
            ramp_secs: config.power_ramp_secs,
            nozzle_offset: cell.x * config.nozzle_offset_cells,
            reach,
        };

        let wind = WindField::from_config(&config, &layout);
        let clock = RoundClock::new(config.total_time());
        let clean = is_clean(&particles, &floor);

        log::info!(
            "Round start: seed={}, leaves={}, time={}",
            seed,
            particles.len(),
            clock.label()
        );

        Self {
            seed,
            config,
            layout,
            phase: RoundState::Running,
            particles,
            emitter,
            wind,
            clock,
            clean,
            time_ticks: 0,
            last_reported_clean: None,
            events: Vec::new(),
        }
    }

    /// Events recorded by the most recent tick that advanced the round
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Leaves still inside the floor rectangle
    pub fn particles_on_floor(&self) -> usize {
        self.particles
            .iter()
            .filter(|p| p.active && self.layout.floor.contains_point(p.pos))
            .count()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.phase,
            emitter: self.emitter.pos,
            nozzle: self.emitter.nozzle(),
            power: self.emitter.power,
            particles: self.particles.iter().map(|p| p.pos).collect(),
            remaining: self.clock.remaining(),
            total: self.clock.total(),
            time_fraction: self.clock.fraction(),
            clock_label: self.clock.label(),
            residual: self.wind.residual_fraction(),
            clean: self.clean,
            on_floor: self.particles_on_floor(),
            ticks: self.time_ticks,
        }
    }

    /// Emit `FloorCleanChanged` if cleanliness moved since the last report
    pub(super) fn report_clean_state(&mut self) {
        if self.last_reported_clean != Some(self.clean) {
            self.last_reported_clean = Some(self.clean);
            log::debug!(
                "Floor clean state: {}",
                if self.clean { "CLEAN" } else { "DIRTY" }
            );
            self.events.push(GameEvent::FloorCleanChanged { clean: self.clean });
        }
    }

    /// Enter a terminal state and freeze everything
    pub(super) fn finish(&mut self, outcome: RoundState) {
        debug_assert!(outcome.is_terminal());
        self.phase = outcome;

        for particle in &mut self.particles {
            particle.vel = Vec2::ZERO;
        }
        self.emitter.stop();
        self.wind.stop();

        match outcome {
            RoundState::Won => {
                log::info!("Round won with {} left", self.clock.label());
                self.events.push(GameEvent::RoundWon {
                    remaining: self.clock.remaining(),
                });
            }
            RoundState::Lost => {
                log::info!(
                    "Round lost: {} leaves still on the floor",
                    self.particles_on_floor()
                );
                self.events.push(GameEvent::RoundLost);
            }
            RoundState::Running => {}
        }
    }
}

/// Random leaf positions in a pile at the arena center, plus jitter
fn scatter_pile(config: &RoundConfig, layout: &FloorLayout, seed: u64) -> Vec<Particle> {
    let mut rng = Pcg32::seed_from_u64(seed);

    let center = layout.arena.center();
    let half = Vec2::new(layout.floor.width(), layout.floor.height()) * config.pile_fraction / 2.0;
    let jitter = layout.cell * config.jitter_cells;

    (0..config.particle_count)
        .map(|_| {
            let base = Vec2::new(
                rng.random_range(center.x - half.x..=center.x + half.x),
                rng.random_range(center.y - half.y..=center.y + half.y),
            );
            let offset = Vec2::new(
                rng.random_range(-jitter.x..=jitter.x),
                rng.random_range(-jitter.y..=jitter.y),
            );
            Particle::new(layout.arena.clamp_point(base + offset))
        })
        .collect()
}
