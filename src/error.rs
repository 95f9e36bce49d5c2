//! Error types for round setup

use thiserror::Error;

/// Invalid round configuration, reported once at construction
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Round needs at least one particle")]
    NoParticles,

    #[error("Floor grid needs at least one cell, got {cols}x{rows}")]
    EmptyGrid { cols: u32, rows: u32 },

    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
