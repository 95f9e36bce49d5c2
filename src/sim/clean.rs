//! Floor cleanliness check

use super::bounds::Bounds;
use super::state::Particle;

/// True when no active leaf lies inside the closed floor rectangle.
/// Stops at the first leaf found on the floor.
pub fn is_clean(particles: &[Particle], floor: &Bounds) -> bool {
    !particles
        .iter()
        .filter(|p| p.active)
        .any(|p| floor.contains_point(p.pos))
}
