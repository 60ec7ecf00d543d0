//! Lidar scan simulation.
//!
//! - [`AngleCache`]: Sine/cosine/cotangent tables over a discretized turn
//! - [`ray_marcher`]: Sphere tracing through the distance field
//! - [`Opponent`]: Square footprint that can occlude the static map
//! - [`NoiseSource`]: Per-beam range noise
//! - [`ScanSimulator`]: Ties the above into one scan per call

mod angle_cache;
mod noise;
mod opponent;
pub mod ray_marcher;
mod simulator;

pub use angle_cache::{AngleCache, BeamDirection};
pub use noise::{GaussianNoise, NoiseSource, ZeroNoise};
pub use opponent::{Intercept, Opponent, VISIBILITY_THRESHOLD};
pub use ray_marcher::{RayHit, BACKOFF_STEP};
pub use simulator::{ScanSimulator, SimulatedScan};
