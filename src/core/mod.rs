//! Core types for the Drishti scan simulator.
//!
//! Coordinate frame follows ROS REP-103:
//! - **X-axis**: Forward
//! - **Y-axis**: Left
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! - [`Pose2D`]: Vehicle position (x, y) and heading (theta)
//! - [`Point2D`]: World-space point in meters

mod point;
mod pose;

pub use point::Point2D;
pub use pose::Pose2D;
