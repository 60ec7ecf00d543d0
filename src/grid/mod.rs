//! Distance field grid.
//!
//! - [`GridGeometry`]: Placement of the grid in the world and the
//!   world-to-cell transform
//! - [`DistanceField`]: Per-cell distance to the nearest obstacle
//! - [`DistanceTransform`]: Converts a thresholded occupancy grid into a
//!   distance field ([`EuclideanDistanceTransform`] is the exact one)
//!
//! ## Ingestion
//!
//! ```text
//! occupancy ──threshold──▶ {0, 99999} ──DistanceTransform──▶ meters
//!   [0, free_threshold] → free (99999)
//!   anything else       → occupied (0)
//! ```

mod distance_field;
mod geometry;
mod transform;

pub use distance_field::{DistanceField, FREE_CELL_SENTINEL};
pub use geometry::{GridCell, GridGeometry};
pub use transform::{DistanceTransform, EuclideanDistanceTransform};
