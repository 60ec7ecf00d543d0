//! Sphere tracing through the distance field.
//!
//! From the sensor, the ray repeatedly advances by the distance field value
//! at its current position. That value is the radius of a disc known to be
//! obstacle free, so a step never passes through a wall:
//!
//! ```text
//!   ●───────▶●────▶●──▶●─▶●   ▓▓ wall
//!   d0       d1    d2  d3 0   ▓▓
//! ```
//!
//! Marching ends once the field reads 0 (occupied cell or off the map).
//! Because field values are per cell, the final step usually lands a little
//! inside the wall; the endpoint is then backed out in small fixed steps
//! until it is free again and the overshoot is subtracted. Without this,
//! long straight walls show grid-aligned banding.

use crate::grid::DistanceField;

use super::angle_cache::BeamDirection;

/// Back-off increment used to step out of an obstacle (meters).
pub const BACKOFF_STEP: f64 = 0.01;

/// Where a marched ray stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Endpoint X after back-off correction
    pub x: f64,
    /// Endpoint Y after back-off correction
    pub y: f64,
    /// Distance travelled along the ray, before range capping
    pub distance: f64,
}

/// March a ray from `(x, y)` along `direction` until it reaches an obstacle
/// or leaves the map.
///
/// Terminates as long as the field reads 0 somewhere along the ray; points
/// outside the map always do.
pub fn march(field: &DistanceField, x: f64, y: f64, direction: &BeamDirection) -> RayHit {
    let (s, c) = (direction.sin, direction.cos);
    let (mut x, mut y) = (x, y);

    let mut step = field.distance_at(x, y);
    let mut total = step;

    while step != 0.0 {
        x += step * c;
        y += step * s;

        step = field.distance_at(x, y);
        total += step;

        if step == 0.0 {
            let mut error = 0.0;
            while step == 0.0 {
                error += BACKOFF_STEP;
                x -= BACKOFF_STEP * c;
                y -= BACKOFF_STEP * s;
                step = field.distance_at(x, y);
            }
            total -= error;
            break;
        }
    }

    RayHit {
        x,
        y,
        distance: total,
    }
}
