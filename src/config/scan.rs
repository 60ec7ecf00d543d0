//! Scan configuration section.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::defaults;

/// Lidar and opponent parameters for a [`ScanSimulator`](crate::ScanSimulator).
///
/// Immutable once the simulator is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of beams per scan (>= 2)
    #[serde(default = "defaults::num_beams")]
    pub num_beams: usize,

    /// Angular sweep covered by the beams (radians)
    #[serde(default = "defaults::field_of_view")]
    pub field_of_view: f64,

    /// Gaussian range noise standard deviation (meters, 0 disables noise)
    #[serde(default = "defaults::scan_std_dev")]
    pub scan_std_dev: f64,

    /// Maximum reported range (meters)
    #[serde(default = "defaults::scan_max_range")]
    pub scan_max_range: f64,

    /// Side length of the square opponent footprint (meters)
    #[serde(default = "defaults::cube_width")]
    pub cube_width: f64,

    /// Tolerance for point-on-edge tests during opponent intersection (meters)
    #[serde(default = "defaults::ray_tracing_epsilon")]
    pub ray_tracing_epsilon: f64,

    /// Number of angle table slots covering a full turn
    #[serde(default = "defaults::theta_discretization")]
    pub theta_discretization: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            num_beams: defaults::num_beams(),
            field_of_view: defaults::field_of_view(),
            scan_std_dev: defaults::scan_std_dev(),
            scan_max_range: defaults::scan_max_range(),
            cube_width: defaults::cube_width(),
            ray_tracing_epsilon: defaults::ray_tracing_epsilon(),
            theta_discretization: defaults::theta_discretization(),
        }
    }
}

impl ScanConfig {
    /// Angle between two adjacent beams (radians)
    #[inline]
    pub fn angle_increment(&self) -> f64 {
        self.field_of_view / (self.num_beams - 1) as f64
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.num_beams < 2 {
            return Err(Error::InvalidParameter(format!(
                "num_beams must be at least 2, got {}",
                self.num_beams
            )));
        }
        if self.theta_discretization < 2 {
            return Err(Error::InvalidParameter(format!(
                "theta_discretization must be at least 2, got {}",
                self.theta_discretization
            )));
        }
        if !self.field_of_view.is_finite() || self.field_of_view <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "field_of_view must be positive, got {}",
                self.field_of_view
            )));
        }
        if self.scan_std_dev.is_nan() || self.scan_std_dev < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scan_std_dev must be non-negative, got {}",
                self.scan_std_dev
            )));
        }
        if self.scan_max_range.is_nan() || self.scan_max_range < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scan_max_range must be non-negative, got {}",
                self.scan_max_range
            )));
        }
        if self.cube_width.is_nan() || self.cube_width <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "cube_width must be positive, got {}",
                self.cube_width
            )));
        }
        if self.ray_tracing_epsilon.is_nan() || self.ray_tracing_epsilon < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "ray_tracing_epsilon must be non-negative, got {}",
                self.ray_tracing_epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_angle_increment() {
        let config = ScanConfig {
            num_beams: 3,
            field_of_view: std::f64::consts::PI,
            ..Default::default()
        };
        assert_eq!(config.angle_increment(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_rejects_single_beam() {
        let config = ScanConfig {
            num_beams: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let negative_noise = ScanConfig {
            scan_std_dev: -0.1,
            ..Default::default()
        };
        assert!(negative_noise.validate().is_err());

        let nan_range = ScanConfig {
            scan_max_range: f64::NAN,
            ..Default::default()
        };
        assert!(nan_range.validate().is_err());

        let flat_cube = ScanConfig {
            cube_width: 0.0,
            ..Default::default()
        };
        assert!(flat_cube.validate().is_err());

        let coarse_table = ScanConfig {
            theta_discretization: 1,
            ..Default::default()
        };
        assert!(coarse_table.validate().is_err());
    }
}
