//! Round configuration
//!
//! Lengths that depend on the floor layout are expressed in floor cells
//! (`*_cells` fields) and resolved once the floor grid is known.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// All parameters of a single round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    // === Arena / floor ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Floor size as a fraction of the arena (0, 1]
    pub floor_fraction: f32,
    pub grid_cols: u32,
    pub grid_rows: u32,

    // === Leaves ===
    pub particle_count: usize,
    /// Round time granted per leaf
    pub secs_per_particle: f32,
    /// Pile size as a fraction of the floor (0, 1]
    pub pile_fraction: f32,
    /// Max jitter added to pile positions (cells)
    pub jitter_cells: f32,

    // === Blower ===
    pub emitter_speed: f32,
    /// Clamp margin from floor edges (cells)
    pub emitter_margin_cells: f32,
    /// Start distance above the floor bottom (cell heights)
    pub emitter_start_offset_cells: f32,
    /// Nozzle distance from the blower center along the emission direction (cell widths)
    pub nozzle_offset_cells: f32,
    pub power_ramp_secs: f32,

    // === Wind ===
    pub wind_base_speed: f32,
    /// Reach along the emission direction (cell widths)
    pub wind_range_cells: f32,
    /// Half thickness of the wind strip (cell heights)
    pub wind_half_width_cells: f32,
    /// Fraction of speed kept at the end of the range [0, 1]
    pub wind_min_factor: f32,
    pub residual_wind_secs: f32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            floor_fraction: FLOOR_FRACTION,
            grid_cols: GRID_COLS,
            grid_rows: GRID_ROWS,

            particle_count: PARTICLE_COUNT,
            secs_per_particle: SECS_PER_PARTICLE,
            pile_fraction: 1.0 / 3.0,
            jitter_cells: 0.1,

            emitter_speed: EMITTER_SPEED,
            emitter_margin_cells: 0.3,
            emitter_start_offset_cells: 1.5,
            // 0.45 of a blower that is 1.2 cells wide
            nozzle_offset_cells: 0.54,
            power_ramp_secs: POWER_RAMP_SECS,

            wind_base_speed: WIND_BASE_SPEED,
            wind_range_cells: 4.0,
            wind_half_width_cells: 1.2,
            wind_min_factor: WIND_MIN_FACTOR,
            residual_wind_secs: RESIDUAL_WIND_SECS,
        }
    }
}

impl RoundConfig {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter, failing on the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.grid_cols == 0 || self.grid_rows == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.grid_cols,
                rows: self.grid_rows,
            });
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("secs_per_particle", self.secs_per_particle)?;
        positive("emitter_speed", self.emitter_speed)?;
        positive("power_ramp_secs", self.power_ramp_secs)?;
        positive("wind_base_speed", self.wind_base_speed)?;
        positive("wind_range_cells", self.wind_range_cells)?;
        positive("wind_half_width_cells", self.wind_half_width_cells)?;
        positive("residual_wind_secs", self.residual_wind_secs)?;

        fraction("floor_fraction", self.floor_fraction)?;
        fraction("pile_fraction", self.pile_fraction)?;
        within("wind_min_factor", self.wind_min_factor, 0.0, 1.0)?;

        // Cell lengths never exceed the grid, and the arena is small enough
        // that twice the grid span in pixels stays finite
        let span = self.grid_cols.max(self.grid_rows) as f32;
        let max_extent = f32::MAX / (4.0 * span);
        within("arena_width", self.arena_width, 0.0, max_extent)?;
        within("arena_height", self.arena_height, 0.0, max_extent)?;

        within("jitter_cells", self.jitter_cells, 0.0, span)?;
        within("emitter_margin_cells", self.emitter_margin_cells, 0.0, span)?;
        within("emitter_start_offset_cells", self.emitter_start_offset_cells, 0.0, span)?;
        within("nozzle_offset_cells", self.nozzle_offset_cells, 0.0, span)?;
        within("wind_range_cells", self.wind_range_cells, 0.0, span)?;
        within("wind_half_width_cells", self.wind_half_width_cells, 0.0, span)?;

        Ok(())
    }

    /// Total round time derived from the leaf count
    pub fn total_time(&self) -> f32 {
        self.particle_count as f32 * self.secs_per_particle
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn within(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// (0, 1]
fn fraction(name: &'static str, value: f32) -> Result<(), ConfigError> {
    positive(name, value)?;
    within(name, value, 0.0, 1.0)
}
