//! Grid placement and world-to-cell coordinate transform.
//!
//! The grid origin is a full pose: the world position of the corner of
//! cell (0, 0) plus the heading of the grid's +X (column) axis.
//!
//! ```text
//!   row
//!    ▲
//!  h │ ┌───┬───┬───┐
//!    │ │ 6 │ 7 │ 8 │     cell index = row * width + col
//!    │ ├───┼───┼───┤
//!    │ │ 3 │ 4 │ 5 │
//!    │ ├───┼───┼───┤
//!    │ │ 0 │ 1 │ 2 │
//!  0 ● └───┴───┴───┘
//!   origin         ──▶ col
//! ```

use crate::core::{Point2D, Pose2D};

/// Row/column address of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Row index (grid-frame Y)
    pub row: usize,
    /// Column index (grid-frame X)
    pub col: usize,
}

impl GridCell {
    /// Create a new cell address
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Size, resolution and placement of a grid in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    width: usize,
    height: usize,
    resolution: f64,
    origin: Pose2D,
    origin_cos: f64,
    origin_sin: f64,
}

impl Default for GridGeometry {
    /// Zero-sized grid; every world point is outside it.
    fn default() -> Self {
        Self::new(0, 0, 1.0, Pose2D::identity())
    }
}

impl GridGeometry {
    /// Create a grid placement. The origin heading's cos/sin are cached.
    pub fn new(width: usize, height: usize, resolution: f64, origin: Pose2D) -> Self {
        Self {
            width,
            height,
            resolution,
            origin,
            origin_cos: origin.theta.cos(),
            origin_sin: origin.theta.sin(),
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell edge length in meters
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// World pose of the grid's (0, 0) corner
    #[inline]
    pub fn origin(&self) -> Pose2D {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert world coordinates to a grid cell.
    ///
    /// Returns `None` when the point lies outside the map.
    #[inline]
    pub fn world_to_cell(&self, x: f64, y: f64) -> Option<GridCell> {
        let x_trans = x - self.origin.x;
        let y_trans = y - self.origin.y;

        // Rotate into the grid frame
        let x_rot = x_trans * self.origin_cos + y_trans * self.origin_sin;
        let y_rot = -x_trans * self.origin_sin + y_trans * self.origin_cos;

        // NaN coordinates fall outside both ranges
        let x_extent = self.width as f64 * self.resolution;
        let y_extent = self.height as f64 * self.resolution;
        if !(0.0..x_extent).contains(&x_rot) || !(0.0..y_extent).contains(&y_rot) {
            return None;
        }

        // The division can round up to width/height right at the far edge
        let col = ((x_rot / self.resolution).floor() as usize).min(self.width - 1);
        let row = ((y_rot / self.resolution).floor() as usize).min(self.height - 1);
        Some(GridCell::new(row, col))
    }

    /// Row-major flat index of a cell
    #[inline]
    pub fn cell_index(&self, cell: GridCell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Flat index of the cell containing a world point, if inside the map
    #[inline]
    pub fn world_to_index(&self, x: f64, y: f64) -> Option<usize> {
        self.world_to_cell(x, y).map(|cell| self.cell_index(cell))
    }

    /// World coordinates of a cell's center.
    pub fn cell_center(&self, cell: GridCell) -> Point2D {
        let local = Point2D::new(
            (cell.col as f64 + 0.5) * self.resolution,
            (cell.row as f64 + 0.5) * self.resolution,
        );
        self.origin.transform_point(local)
    }
}
