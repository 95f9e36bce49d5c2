//! Round simulation
//!
//! All gameplay logic lives here. No rendering or input-device code:
//! - Caller-supplied frame time, one `tick` per frame
//! - Seeded RNG only (leaf pile placement)
//! - Stable iteration order (leaves keep their index for the whole round)

pub mod autopilot;
pub mod bounds;
pub mod clean;
pub mod clock;
pub mod state;
pub mod tick;
pub mod wind;

pub use autopilot::autopilot_input;
pub use bounds::{Bounds, FloorLayout};
pub use clean::is_clean;
pub use clock::RoundClock;
pub use state::{Emitter, GameEvent, Particle, RoundSnapshot, RoundState, Simulation};
pub use tick::{TickInput, tick};
pub use wind::WindField;
