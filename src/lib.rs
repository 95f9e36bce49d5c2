//! Leaf Blower - a small arcade round: blow a pile of leaves off the floor
//! before the timer runs out.
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (wind field, leaves, blower, round clock)
//! - `config`: Round parameters with validation
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod sim;

pub use config::RoundConfig;
pub use error::ConfigError;

/// Default round constants (the values of the original scene)
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Floor covers this fraction of the arena, centered
    pub const FLOOR_FRACTION: f32 = 0.8;
    /// Floor tile grid
    pub const GRID_COLS: u32 = 8;
    pub const GRID_ROWS: u32 = 8;

    /// Leaves in the pile
    pub const PARTICLE_COUNT: usize = 60;
    /// Each leaf grants this much round time
    pub const SECS_PER_PARTICLE: f32 = 1.0;

    /// Blower movement speed (pixels/s)
    pub const EMITTER_SPEED: f32 = 260.0;
    /// Seconds to reach full power
    pub const POWER_RAMP_SECS: f32 = 1.0;

    /// Wind speed at the nozzle at full power (pixels/s)
    pub const WIND_BASE_SPEED: f32 = 220.0;
    /// Fraction of speed kept at the end of the wind range
    pub const WIND_MIN_FACTOR: f32 = 0.3;
    /// Residual wind after the blower turns off
    pub const RESIDUAL_WIND_SECS: f32 = 2.0;

    /// Fixed frame step used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Format seconds as `M:SS`, rounding up to the next whole second
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0).ceil() as u32;
    format!("{}:{:02}", total / 60, total % 60)
}
