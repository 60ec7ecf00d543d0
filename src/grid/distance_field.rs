//! Distance field storage and queries.
//!
//! Each cell holds the distance in meters from that cell to the nearest
//! occupied cell (0 for occupied cells). Points outside the map read as 0,
//! so a ray marched off the edge terminates exactly like one that reached
//! a wall.

use log::debug;

use crate::core::{Point2D, Pose2D};
use crate::error::{Error, Result};

use super::geometry::{GridCell, GridGeometry};
use super::transform::DistanceTransform;

/// Value given to free cells before the distance transform runs.
pub const FREE_CELL_SENTINEL: f64 = 99999.0;

/// Row-major distance field plus its placement in the world.
///
/// Replaced wholesale on full map ingestion; read-only between ingestions.
#[derive(Clone, Debug, Default)]
pub struct DistanceField {
    values: Vec<f64>,
    geometry: GridGeometry,
}

impl DistanceField {
    /// Build a field from a raw occupancy sequence.
    ///
    /// Cells with occupancy in `[0, free_threshold]` are free; everything
    /// else, negative "unknown" values included, is occupied.
    pub fn from_occupancy(
        occupancy: &[f64],
        geometry: GridGeometry,
        free_threshold: f64,
        transform: &dyn DistanceTransform,
    ) -> Result<Self> {
        check_geometry(occupancy, &geometry)?;
        let mut field = Self {
            values: Vec::with_capacity(occupancy.len()),
            geometry,
        };
        field.values.extend(occupancy.iter().map(|&v| threshold(v, free_threshold)));
        field.finish_ingest(transform);
        Ok(field)
    }

    /// Wrap an already-transformed field.
    pub fn from_values(values: Vec<f64>, geometry: GridGeometry) -> Result<Self> {
        check_geometry(&values, &geometry)?;
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(Error::InvalidParameter(format!(
                "distance field values must be finite and non-negative, got {}",
                bad
            )));
        }
        Ok(Self { values, geometry })
    }

    /// Re-threshold and re-transform over the existing grid geometry.
    pub fn rethreshold(
        &mut self,
        occupancy: &[f64],
        free_threshold: f64,
        transform: &dyn DistanceTransform,
    ) -> Result<()> {
        check_len(occupancy, &self.geometry)?;
        for (cell, &v) in self.values.iter_mut().zip(occupancy) {
            *cell = threshold(v, free_threshold);
        }
        self.finish_ingest(transform);
        Ok(())
    }

    fn finish_ingest(&mut self, transform: &dyn DistanceTransform) {
        let occupied = self.values.iter().filter(|&&v| v == 0.0).count();
        transform.transform(
            &mut self.values,
            self.geometry.width(),
            self.geometry.height(),
            self.geometry.resolution(),
        );
        debug!(
            "Distance field ingested: {}x{} @ {:.3} m/cell, {} occupied of {} cells",
            self.geometry.width(),
            self.geometry.height(),
            self.geometry.resolution(),
            occupied,
            self.values.len()
        );
    }

    /// Distance to the nearest obstacle at a world point (0 outside the map).
    #[inline]
    pub fn distance_at(&self, x: f64, y: f64) -> f64 {
        match self.geometry.world_to_index(x, y) {
            Some(index) => self.values[index],
            None => 0.0,
        }
    }

    /// Distance stored at a cell, if the cell exists
    #[inline]
    pub fn get(&self, cell: GridCell) -> Option<f64> {
        if cell.row < self.geometry.height() && cell.col < self.geometry.width() {
            Some(self.values[self.geometry.cell_index(cell)])
        } else {
            None
        }
    }

    /// World-space center of a cell
    #[inline]
    pub fn cell_center(&self, cell: GridCell) -> Point2D {
        self.geometry.cell_center(cell)
    }

    /// Grid placement
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Raw row-major values
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    /// Cell edge length in meters
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.geometry.resolution()
    }

    /// World pose of the grid's (0, 0) corner
    #[inline]
    pub fn origin(&self) -> Pose2D {
        self.geometry.origin()
    }
}

#[inline]
fn threshold(occupancy: f64, free_threshold: f64) -> f64 {
    if (0.0..=free_threshold).contains(&occupancy) {
        FREE_CELL_SENTINEL
    } else {
        0.0
    }
}

fn check_geometry(values: &[f64], geometry: &GridGeometry) -> Result<()> {
    let resolution = geometry.resolution();
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "map resolution must be finite and positive, got {}",
            resolution
        )));
    }
    check_len(values, geometry)
}

fn check_len(values: &[f64], geometry: &GridGeometry) -> Result<()> {
    if values.len() != geometry.len() {
        return Err(Error::MapSizeMismatch {
            expected: geometry.len(),
            actual: values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EuclideanDistanceTransform;
    use approx::assert_relative_eq;

    /// Leaves thresholded values untouched.
    struct Identity;

    impl DistanceTransform for Identity {
        fn transform(&self, _grid: &mut [f64], _width: usize, _height: usize, _resolution: f64) {}
    }

    #[test]
    fn test_thresholding() {
        let occupancy = [0.0, 0.5, 0.8, 0.81, 1.0, -1.0];
        let geometry = GridGeometry::new(3, 2, 1.0, Pose2D::identity());
        let field = DistanceField::from_occupancy(&occupancy, geometry, 0.8, &Identity).unwrap();

        assert_eq!(
            field.values(),
            &[FREE_CELL_SENTINEL, FREE_CELL_SENTINEL, FREE_CELL_SENTINEL, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_size_mismatch() {
        let geometry = GridGeometry::new(3, 3, 1.0, Pose2D::identity());
        let result = DistanceField::from_occupancy(&[0.0; 8], geometry, 0.5, &Identity);
        assert!(matches!(
            result,
            Err(Error::MapSizeMismatch {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_distance_at() {
        // 4x1 corridor, wall in the last cell
        let occupancy = [0.0, 0.0, 0.0, 1.0];
        let geometry = GridGeometry::new(4, 1, 0.5, Pose2D::new(1.0, 0.0, 0.0));
        let field = DistanceField::from_occupancy(
            &occupancy,
            geometry,
            0.5,
            &EuclideanDistanceTransform,
        )
        .unwrap();

        assert_relative_eq!(field.distance_at(1.1, 0.25), 1.5);
        assert_relative_eq!(field.distance_at(2.2, 0.25), 0.5);
        assert_eq!(field.distance_at(2.9, 0.25), 0.0);
        // Outside reads as an obstacle
        assert_eq!(field.distance_at(0.9, 0.25), 0.0);
        assert_eq!(field.distance_at(1.1, 0.6), 0.0);
    }

    #[test]
    fn test_rethreshold_keeps_geometry() {
        let geometry = GridGeometry::new(2, 2, 0.1, Pose2D::new(5.0, 5.0, 0.3));
        let mut field =
            DistanceField::from_occupancy(&[0.0, 0.0, 0.0, 1.0], geometry.clone(), 0.5, &Identity)
                .unwrap();

        field.rethreshold(&[1.0, 0.0, 0.0, 0.0], 0.5, &Identity).unwrap();

        assert_eq!(field.geometry(), &geometry);
        assert_eq!(field.values()[0], 0.0);
        assert_eq!(field.values()[3], FREE_CELL_SENTINEL);
        assert!(field.rethreshold(&[0.0; 3], 0.5, &Identity).is_err());
    }

    #[test]
    fn test_from_values() {
        let geometry = GridGeometry::new(2, 1, 1.0, Pose2D::identity());
        let field = DistanceField::from_values(vec![0.0, 1.0], geometry.clone()).unwrap();
        assert_eq!(field.get(GridCell::new(0, 1)), Some(1.0));
        assert_eq!(field.get(GridCell::new(1, 0)), None);

        assert!(DistanceField::from_values(vec![0.0, -1.0], geometry.clone()).is_err());
        assert!(DistanceField::from_values(vec![0.0, f64::INFINITY], geometry.clone()).is_err());
        assert!(DistanceField::from_values(vec![0.0], geometry).is_err());

        for resolution in [f64::NAN, f64::INFINITY, 0.0, -0.5] {
            let geometry = GridGeometry::new(2, 1, resolution, Pose2D::identity());
            assert!(
                matches!(
                    DistanceField::from_values(vec![0.0, 1.0], geometry),
                    Err(Error::InvalidParameter(_))
                ),
                "resolution {}",
                resolution
            );
        }
    }

    #[test]
    fn test_cell_center_reads_back() {
        let geometry = GridGeometry::new(6, 4, 0.25, Pose2D::new(-1.0, 2.0, 0.4));
        let mut values = vec![1.0; 24];
        values[2 * 6 + 5] = 0.0;
        let field = DistanceField::from_values(values, geometry).unwrap();

        let center = field.cell_center(GridCell::new(2, 5));
        assert_eq!(field.distance_at(center.x, center.y), 0.0);
        let free = field.cell_center(GridCell::new(1, 1));
        assert_eq!(field.distance_at(free.x, free.y), 1.0);
    }

    #[test]
    fn test_default_is_empty() {
        let field = DistanceField::default();
        assert_eq!(field.width(), 0);
        assert_eq!(field.distance_at(0.0, 0.0), 0.0);
    }
}
