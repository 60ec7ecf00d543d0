//! # Drishti
//!
//! 2D lidar scan simulator for racing vehicles.
//!
//! ## Overview
//!
//! Given a static occupancy map, a sensor pose and the pose of one square
//! opponent, Drishti produces the range readings a planar lidar would
//! return:
//!
//! - **Distance field**: The map is converted once into per-cell distances
//!   to the nearest obstacle
//! - **Ray marching**: Each beam sphere-traces through the field, with a
//!   small back-off to correct grid overshoot
//! - **Opponent occlusion**: Beams that cross the opponent's footprint
//!   before reaching a wall report the opponent's near face instead
//! - **Noise**: Optional zero-mean Gaussian noise per beam
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::{Pose2D, ScanConfig, ScanSimulator};
//!
//! let mut sim = ScanSimulator::new(ScanConfig::default())?;
//! sim.set_map(&occupancy, height, width, 0.05, Pose2D::identity(), 0.8)?;
//!
//! let scan = sim.scan(&Pose2D::new(2.0, 1.0, 0.0), &opponent_pose, true);
//! println!("{} beams, opponent seen: {}", scan.ranges().len(), scan.can_see_opponent());
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of vehicle)
//! - Y: Left (positive to vehicle's left)
//! - Theta: Rotation in radians, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Configuration
pub mod config;

// Error types
pub mod error;

// Distance field grid
pub mod grid;

// Scan simulation
pub mod sensor;

// Re-export commonly used types
pub use crate::core::{Point2D, Pose2D};

pub use config::{MapSettings, NoiseSettings, ScanConfig, SimulatorConfig};

pub use error::{Error, Result};

pub use grid::{
    DistanceField, DistanceTransform, EuclideanDistanceTransform, GridCell, GridGeometry,
    FREE_CELL_SENTINEL,
};

pub use sensor::{
    AngleCache, BeamDirection, GaussianNoise, NoiseSource, Opponent, ScanSimulator,
    SimulatedScan, ZeroNoise, VISIBILITY_THRESHOLD,
};
