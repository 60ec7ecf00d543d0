//! Configuration loading for Drishti.
//!
//! All settings live in a single YAML file; every field has a default, so
//! an empty file (or no file at all) yields a working simulator.
//!
//! ## Example YAML
//!
//! ```yaml
//! scan:
//!   num_beams: 1080
//!   field_of_view: 4.71238898   # 270°
//!   scan_std_dev: 0.01
//!   scan_max_range: 10.0
//!   cube_width: 0.5             # opponent footprint
//!   ray_tracing_epsilon: 0.0001
//!   theta_discretization: 2000
//!
//! map:
//!   free_threshold: 0.8
//!
//! noise:
//!   seed: 42                    # 0 = entropy
//! ```

mod defaults;
mod scan;
mod simulator;

pub use scan::ScanConfig;
pub use simulator::{MapSettings, NoiseSettings, SimulatorConfig};
