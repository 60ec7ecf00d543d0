//! Test utilities for Drishti scan simulation.
//!
//! This module provides helpers for building occupancy maps and simulators.

#![allow(dead_code)]

use std::f64::consts::PI;

use drishti::{Pose2D, ScanConfig, ScanSimulator, ZeroNoise};

/// Occupancy value used for walls.
pub const WALL: f64 = 1.0;

/// Initialize logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// All-free occupancy grid.
pub fn empty_map(width: usize, height: usize) -> Vec<f64> {
    vec![0.0; width * height]
}

/// Grid with a one-cell wall around the border.
pub fn walled_room(width: usize, height: usize) -> Vec<f64> {
    let mut occupancy = empty_map(width, height);
    for row in 0..height {
        for col in 0..width {
            if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                occupancy[row * width + col] = WALL;
            }
        }
    }
    occupancy
}

/// Three beams over a half turn: right, ahead, left of the sensor.
pub fn three_beam_config(max_range: f64, cube_width: f64) -> ScanConfig {
    ScanConfig {
        num_beams: 3,
        field_of_view: PI,
        scan_std_dev: 0.0,
        scan_max_range: max_range,
        cube_width,
        ..Default::default()
    }
}

/// Noise-free simulator over a square map at 1 m per cell.
pub fn simulator(config: ScanConfig, occupancy: &[f64], size: usize) -> ScanSimulator<ZeroNoise> {
    init_logging();
    let mut sim = ScanSimulator::with_noise(config, ZeroNoise).unwrap();
    sim.set_map(occupancy, size, size, 1.0, Pose2D::identity(), 0.8)
        .unwrap();
    sim
}

/// Opponent pose far outside any test map.
pub fn absent_opponent() -> Pose2D {
    Pose2D::new(500.0, 500.0, 0.0)
}
