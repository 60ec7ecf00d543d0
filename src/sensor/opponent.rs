//! Beam intersection with the square opponent footprint.
//!
//! The beam is treated as the infinite line `x = k·y + b` (k = cot θ),
//! which is well defined for every direction except the horizontal ones;
//! those use a simpler special case.
//!
//! ```text
//!            c2 ─────── c1          corners at θ+45°, θ+135°,
//!             │    ●    │           θ+225°, θ+315° around the
//!   sensor ●──┼─────────┼──▶ wall   center, radius side·√2/2
//!             │         │
//!            c3 ─────── c4
//! ```
//!
//! 1. **Rejection**: if all four corners lie strictly on one side of the
//!    beam line, the beam misses.
//! 2. **Ordering**: the opponent only matters if it sits between the sensor
//!    and the wall the ray marcher found.
//! 3. **Measurement**: intersect the beam line with each edge, keep the
//!    hits that lie on their edge (within `epsilon`), return the nearest.

use std::f64::consts::{PI, SQRT_2};

use crate::core::{Point2D, Pose2D};

use super::angle_cache::BeamDirection;
use super::ray_marcher::RayHit;

/// Sensor-to-opponent distance under which the opponent counts as seen
/// (meters).
pub const VISIBILITY_THRESHOLD: f64 = 5.0;

/// Square footprint of the opponent for one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Opponent {
    center: Point2D,
    side: f64,
    corners: [Point2D; 4],
}

/// Result of testing a beam against the opponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intercept {
    /// The beam misses, or the opponent is not between sensor and wall.
    Clear,
    /// The opponent occludes the wall on this beam.
    Occluding {
        /// Distance from the sensor to the first face hit. `None` when the
        /// beam passed rejection but no edge intersection qualified.
        range: Option<f64>,
        /// Distance from the sensor to the opponent's center
        center_distance: f64,
    },
}

impl Opponent {
    /// Footprint of a `side`-wide square centered on `pose`.
    pub fn new(pose: &Pose2D, side: f64) -> Self {
        let radius = SQRT_2 * side / 2.0;
        let corner = |offset: f64| {
            Point2D::new(
                radius * (offset + pose.theta).cos() + pose.x,
                radius * (offset + pose.theta).sin() + pose.y,
            )
        };

        Self {
            center: pose.position(),
            side,
            corners: [
                corner(PI / 4.0),
                corner(3.0 * PI / 4.0),
                corner(5.0 * PI / 4.0),
                corner(7.0 * PI / 4.0),
            ],
        }
    }

    /// Center of the footprint
    #[inline]
    pub fn center(&self) -> Point2D {
        self.center
    }

    /// Side length of the footprint
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Corners in counter-clockwise order, starting at heading + 45°
    #[inline]
    pub fn corners(&self) -> &[Point2D; 4] {
        &self.corners
    }

    /// Test a marched beam against the footprint.
    ///
    /// `origin` is the sensor position, `hit` the ray marcher's result for
    /// the same beam.
    pub fn intercept(
        &self,
        origin: Point2D,
        hit: &RayHit,
        direction: &BeamDirection,
        epsilon: f64,
    ) -> Intercept {
        let k = direction.cot;
        let b = hit.x - k * hit.y;

        let rejected = if direction.horizontal {
            self.all_corners(|c| c.y > origin.y) || self.all_corners(|c| c.y < origin.y)
        } else {
            self.all_corners(|c| k * c.y + b > c.x) || self.all_corners(|c| k * c.y + b < c.x)
        };
        if rejected {
            return Intercept::Clear;
        }

        let center_distance = origin.distance(&self.center);
        let endpoint = Point2D::new(hit.x, hit.y);
        let in_front =
            center_distance < hit.distance && endpoint.distance(&self.center) < hit.distance;
        if !in_front {
            return Intercept::Clear;
        }

        let range = if direction.horizontal {
            Some(center_distance - self.side / 2.0)
        } else {
            self.nearest_edge_hit(origin, k, b, epsilon)
        };

        Intercept::Occluding {
            range,
            center_distance,
        }
    }

    #[inline]
    fn all_corners(&self, pred: impl Fn(&Point2D) -> bool) -> bool {
        self.corners.iter().all(pred)
    }

    /// Nearest intersection of the line `x = k·y + b` with an edge.
    fn nearest_edge_hit(&self, origin: Point2D, k: f64, b: f64, epsilon: f64) -> Option<f64> {
        let mut nearest: Option<f64> = None;

        for i in 0..4 {
            let p = self.corners[i];
            let q = self.corners[(i + 1) % 4];

            // Line through p and q, solved against the beam line
            let iy = (q.y * p.x - q.y * b + p.y * b - p.y * q.x) / (k * q.y - k * p.y - q.x + p.x);
            let ix = k * iy + b;

            if within(iy, p.y, q.y, epsilon) && within(ix, p.x, q.x, epsilon) {
                let d = origin.distance(&Point2D::new(ix, iy));
                nearest = Some(nearest.map_or(d, |n| n.min(d)));
            }
        }

        nearest
    }
}

/// Whether `v` lies between `a` and `b` (either order), widened by `epsilon`.
/// NaN is never within.
#[inline]
fn within(v: f64, a: f64, b: f64, epsilon: f64) -> bool {
    (a + epsilon >= v && v >= b - epsilon) || (a - epsilon <= v && v <= b + epsilon)
}
