//! Scan simulator: drives the per-beam loop.
//!
//! For each beam:
//!
//! ```text
//! index ──round──▶ AngleCache ──(sin, cos, cot)──▶ march ──▶ RayHit
//!                                                            │
//!                        Opponent::intercept ◀───────────────┘
//!                                │
//!             min(range, max_range) + noise ──▶ output[i]
//! ```
//!
//! The fractional table index then advances by one beam step and wraps.

use log::{info, trace};

use crate::config::{ScanConfig, SimulatorConfig};
use crate::core::Pose2D;
use crate::error::{Error, Result};
use crate::grid::{DistanceField, EuclideanDistanceTransform, GridGeometry};

use super::angle_cache::AngleCache;
use super::noise::{GaussianNoise, NoiseSource};
use super::opponent::{Intercept, Opponent, VISIBILITY_THRESHOLD};
use super::ray_marcher;

/// One simulated scan.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedScan {
    ranges: Vec<f64>,
    can_see_opponent: bool,
}

impl SimulatedScan {
    /// Range reading per beam (meters), first beam at heading − FOV/2
    #[inline]
    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }

    /// Take ownership of the readings
    #[inline]
    pub fn into_ranges(self) -> Vec<f64> {
        self.ranges
    }

    /// Whether this scan saw the opponent within [`VISIBILITY_THRESHOLD`].
    ///
    /// Always false for scans run without visibility tracking.
    #[inline]
    pub fn can_see_opponent(&self) -> bool {
        self.can_see_opponent
    }
}

/// 2D lidar simulator over a static distance field plus one square opponent.
///
/// Angle tables are built once at construction. The map can be replaced at
/// any time between scans; `&mut self` keeps ingestion and scanning from
/// overlapping.
pub struct ScanSimulator<N: NoiseSource = GaussianNoise> {
    config: ScanConfig,
    angles: AngleCache,
    field: DistanceField,
    noise: N,
}

impl ScanSimulator<GaussianNoise> {
    /// Create a simulator with entropy-seeded Gaussian noise.
    pub fn new(config: ScanConfig) -> Result<Self> {
        Self::with_seed(config, 0)
    }

    /// Create a simulator with seeded Gaussian noise (0 = entropy).
    pub fn with_seed(config: ScanConfig, seed: u64) -> Result<Self> {
        Self::with_noise(config, GaussianNoise::new(seed))
    }

    /// Create a simulator from a loaded configuration file.
    pub fn from_config(config: &SimulatorConfig) -> Result<Self> {
        Self::with_seed(config.scan.clone(), config.noise.seed)
    }
}

impl<N: NoiseSource> ScanSimulator<N> {
    /// Create a simulator with a custom noise source.
    ///
    /// The simulator starts with an empty map, on which every beam reads 0.
    pub fn with_noise(config: ScanConfig, noise: N) -> Result<Self> {
        config.validate()?;
        let angles = AngleCache::new(&config);

        info!(
            "Scan simulator: {} beams over {:.3} rad, {} angle slots ({:.4} per beam), max range {:.2} m",
            config.num_beams,
            config.field_of_view,
            angles.discretization(),
            angles.index_step(),
            config.scan_max_range
        );

        Ok(Self {
            config,
            angles,
            field: DistanceField::default(),
            noise,
        })
    }

    /// Replace the map: geometry and contents.
    ///
    /// `occupancy` is row-major, `width * height` long. Values in
    /// `[0, free_threshold]` are free, everything else is an obstacle.
    pub fn set_map(
        &mut self,
        occupancy: &[f64],
        height: usize,
        width: usize,
        resolution: f64,
        origin: Pose2D,
        free_threshold: f64,
    ) -> Result<()> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "map resolution must be finite and positive, got {}",
                resolution
            )));
        }
        let geometry = GridGeometry::new(width, height, resolution, origin);
        self.field = DistanceField::from_occupancy(
            occupancy,
            geometry,
            free_threshold,
            &EuclideanDistanceTransform,
        )?;
        Ok(())
    }

    /// Re-threshold new occupancy values over the current map geometry.
    pub fn update_map(&mut self, occupancy: &[f64], free_threshold: f64) -> Result<()> {
        self.field
            .rethreshold(occupancy, free_threshold, &EuclideanDistanceTransform)
    }

    /// Swap in a prepared distance field.
    pub fn replace_distance_field(&mut self, field: DistanceField) {
        self.field = field;
    }

    /// Simulate one scan into a new buffer.
    ///
    /// With `track_visibility`, the result also reports whether any beam
    /// found the opponent within [`VISIBILITY_THRESHOLD`] of the sensor.
    pub fn scan(
        &mut self,
        pose: &Pose2D,
        opponent: &Pose2D,
        track_visibility: bool,
    ) -> SimulatedScan {
        let mut ranges = vec![0.0; self.config.num_beams];
        let can_see_opponent = self.trace_beams(pose, opponent, track_visibility, &mut ranges);
        SimulatedScan {
            ranges,
            can_see_opponent,
        }
    }

    /// Simulate one scan into a caller-owned buffer of exactly `num_beams`
    /// readings. Returns the visibility result.
    pub fn scan_into(
        &mut self,
        pose: &Pose2D,
        opponent: &Pose2D,
        track_visibility: bool,
        ranges: &mut [f64],
    ) -> Result<bool> {
        if ranges.len() != self.config.num_beams {
            return Err(Error::BufferLength {
                expected: self.config.num_beams,
                actual: ranges.len(),
            });
        }
        Ok(self.trace_beams(pose, opponent, track_visibility, ranges))
    }

    fn trace_beams(
        &mut self,
        pose: &Pose2D,
        opponent: &Pose2D,
        track_visibility: bool,
        ranges: &mut [f64],
    ) -> bool {
        let max_range = self.config.scan_max_range;
        let std_dev = self.config.scan_std_dev;
        let epsilon = self.config.ray_tracing_epsilon;

        let origin = pose.position();
        let opponent = Opponent::new(opponent, self.config.cube_width);
        let mut can_see_opponent = false;

        let mut index = self
            .angles
            .start_index(pose.theta, self.config.field_of_view);

        for range in ranges.iter_mut() {
            let direction = self.angles.direction(index);
            let hit = ray_marcher::march(&self.field, origin.x, origin.y, &direction);

            *range = match opponent.intercept(origin, &hit, &direction, epsilon) {
                Intercept::Clear => hit.distance.min(max_range),
                Intercept::Occluding {
                    range: face,
                    center_distance,
                } => {
                    if track_visibility && center_distance < VISIBILITY_THRESHOLD {
                        can_see_opponent = true;
                    }
                    match face {
                        Some(face) => face.min(max_range),
                        None => {
                            trace!(
                                "Beam slot {} crosses opponent footprint with no edge hit",
                                direction.index
                            );
                            max_range
                        }
                    }
                }
            };

            if std_dev > 0.0 {
                *range += self.noise.sample(std_dev);
            }

            index = self.angles.advance(index);
        }

        can_see_opponent
    }

    /// World angle (radians, `[0, 2π]`) of every beam for a sensor pose,
    /// as snapped to the angle table.
    pub fn beam_angles(&self, pose: &Pose2D) -> Vec<f64> {
        let mut index = self
            .angles
            .start_index(pose.theta, self.config.field_of_view);
        (0..self.config.num_beams)
            .map(|_| {
                let angle = self.angles.slot_angle(self.angles.direction(index).index);
                index = self.angles.advance(index);
                angle
            })
            .collect()
    }

    /// Scan configuration
    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Precomputed angle tables
    #[inline]
    pub fn angle_cache(&self) -> &AngleCache {
        &self.angles
    }

    /// Current distance field
    #[inline]
    pub fn distance_field(&self) -> &DistanceField {
        &self.field
    }
}
