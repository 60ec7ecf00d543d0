//! Default value functions for serde deserialization.

pub fn num_beams() -> usize {
    1080
}

/// 270° sweep
pub fn field_of_view() -> f64 {
    4.71238898
}

pub fn scan_std_dev() -> f64 {
    0.01
}

pub fn scan_max_range() -> f64 {
    10.0
}

pub fn cube_width() -> f64 {
    0.5
}

pub fn ray_tracing_epsilon() -> f64 {
    0.0001
}

pub fn theta_discretization() -> usize {
    2000
}

pub fn free_threshold() -> f64 {
    0.8
}
