//! Precomputed trigonometry over a discretized full turn.
//!
//! The circle is cut into `discretization` slots. Each beam's heading is
//! snapped to the nearest slot, so sine, cosine and cotangent are looked up
//! instead of evaluated on the hot path.
//!
//! ```text
//!  slot:   0        D/4        D/2       3D/4        D
//!  angle:  0        π/2         π        3π/2        2π
//!          └─ horizontal ─┘     └ horizontal ┘      (== slot 0)
//! ```
//!
//! Beams are `index_step` slots apart. The step is generally fractional;
//! the running index stays fractional and is only rounded at lookup.

use std::f64::consts::{PI, TAU};

use crate::config::ScanConfig;

/// Trigonometry for one table slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamDirection {
    /// Table slot this direction was read from
    pub index: usize,
    /// sin(theta)
    pub sin: f64,
    /// cos(theta)
    pub cos: f64,
    /// cot(theta); the beam line is `x = cot * y + b`
    pub cot: f64,
    /// Whether the beam is parallel to the map's X axis (cot is singular)
    pub horizontal: bool,
}

/// Sine, cosine and cotangent tables of length `discretization + 1`.
#[derive(Clone, Debug)]
pub struct AngleCache {
    sines: Vec<f64>,
    cosines: Vec<f64>,
    cotangents: Vec<f64>,
    discretization: usize,
    index_step: f64,
}

impl AngleCache {
    /// Build the tables for a scan configuration.
    pub fn new(config: &ScanConfig) -> Self {
        let discretization = config.theta_discretization;
        let slots = discretization + 1;
        let mut sines = Vec::with_capacity(slots);
        let mut cosines = Vec::with_capacity(slots);
        let mut cotangents = Vec::with_capacity(slots);

        for i in 0..slots {
            let theta = (2.0 * PI * i as f64) / discretization as f64;
            sines.push(theta.sin());
            cosines.push(theta.cos());
            // Computed at every slot, singular ones included; horizontal
            // beams never read it.
            cotangents.push(1.0 / theta.tan());
        }

        // Whole turns drop out so `advance` wraps with a single subtraction
        let d = discretization as f64;
        let index_step = (d * config.angle_increment() / TAU) % d;

        Self {
            sines,
            cosines,
            cotangents,
            discretization,
            index_step,
        }
    }

    /// Number of slots covering a full turn
    #[inline]
    pub fn discretization(&self) -> usize {
        self.discretization
    }

    /// Table slots advanced per beam
    #[inline]
    pub fn index_step(&self) -> f64 {
        self.index_step
    }

    /// Table length (`discretization + 1`)
    #[inline]
    pub fn len(&self) -> usize {
        self.sines.len()
    }

    /// Whether the tables hold no slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sines.is_empty()
    }

    /// Fractional index of the first beam for a sensor heading, in
    /// `[0, discretization]`.
    pub fn start_index(&self, heading: f64, field_of_view: f64) -> f64 {
        let d = self.discretization as f64;
        let index = (d * (heading - field_of_view / 2.0) / TAU) % d;
        if index < 0.0 {
            index + d
        } else {
            index
        }
    }

    /// Advance a fractional index by one beam, wrapping into
    /// `[0, discretization)`.
    #[inline]
    pub fn advance(&self, index: f64) -> f64 {
        let d = self.discretization as f64;
        let mut next = index + self.index_step;
        while next >= d {
            next -= d;
        }
        next
    }

    /// Direction for a fractional index, rounded to the nearest slot.
    #[inline]
    pub fn direction(&self, index: f64) -> BeamDirection {
        let slot = ((index + 0.5) as usize).min(self.discretization);
        BeamDirection {
            index: slot,
            sin: self.sines[slot],
            cos: self.cosines[slot],
            cot: self.cotangents[slot],
            horizontal: self.is_horizontal(slot),
        }
    }

    /// Whether a slot points along ±X
    #[inline]
    pub fn is_horizontal(&self, slot: usize) -> bool {
        slot == 0 || slot == self.discretization / 2 || slot == self.discretization
    }

    /// World angle of a slot (radians, `[0, 2π]`)
    #[inline]
    pub fn slot_angle(&self, slot: usize) -> f64 {
        (2.0 * PI * slot as f64) / self.discretization as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn config(num_beams: usize, field_of_view: f64, theta_discretization: usize) -> ScanConfig {
        ScanConfig {
            num_beams,
            field_of_view,
            theta_discretization,
            ..Default::default()
        }
    }

    #[test]
    fn test_table_length() {
        let cache = AngleCache::new(&config(1080, 4.7, 2000));
        assert_eq!(cache.len(), 2001);
        assert_eq!(cache.discretization(), 2000);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_table_values() {
        let cache = AngleCache::new(&config(3, PI, 8));

        let east = cache.direction(0.0);
        assert_eq!(east.sin, 0.0);
        assert_eq!(east.cos, 1.0);
        assert!(east.horizontal);

        let north = cache.direction(2.0);
        assert_relative_eq!(north.sin, 1.0);
        assert_relative_eq!(north.cos, 0.0, epsilon = 1e-12);
        assert_relative_eq!(north.cot, 0.0, epsilon = 1e-12);
        assert!(!north.horizontal);

        let diagonal = cache.direction(1.0);
        assert_relative_eq!(diagonal.cot, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cotangent_computed_at_singular_slots() {
        let cache = AngleCache::new(&config(3, PI, 8));
        // slot 0: 1/tan(0)
        assert_eq!(cache.direction(0.0).cot, f64::INFINITY);
        // slot D/2: 1/tan(π) is finite but huge
        let west = cache.direction(4.0);
        assert!(west.horizontal);
        assert!(west.cot.is_finite());
        assert!(west.cot.abs() > 1e12);
    }

    #[test]
    fn test_index_step() {
        // 3 beams over π: one beam every quarter turn
        let cache = AngleCache::new(&config(3, PI, 2000));
        assert_relative_eq!(cache.index_step(), 500.0, epsilon = 1e-9);

        let cache = AngleCache::new(&config(1081, 3.0 * FRAC_PI_2, 1440));
        assert_relative_eq!(cache.index_step(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_index_step_reduced_to_one_turn() {
        // Beam spacing of more than a full turn
        let cache = AngleCache::new(&config(3, 3.0 * TAU, 2000));
        assert_relative_eq!(cache.index_step(), 1000.0, epsilon = 1e-9);

        let cache = AngleCache::new(&config(3, 1e20, 2000));
        assert!((0.0..2000.0).contains(&cache.index_step()));
        let next = cache.advance(1999.0);
        assert!((0.0..2000.0).contains(&next));
    }

    #[test]
    fn test_start_index_wraps() {
        let cache = AngleCache::new(&config(3, PI, 2000));

        // Heading 0, FOV π: first beam at −π/2 → 3/4 turn
        assert_relative_eq!(cache.start_index(0.0, PI), 1500.0, epsilon = 1e-9);
        // Heading π/2: first beam at 0
        assert_relative_eq!(cache.start_index(FRAC_PI_2, PI), 0.0, epsilon = 1e-9);
        // Headings differing by whole turns land on the same slot
        let a = cache.start_index(1.0, PI);
        let b = cache.start_index(1.0 + 4.0 * TAU, PI);
        let c = cache.start_index(1.0 - 3.0 * TAU, PI);
        assert_relative_eq!(a, b, epsilon = 1e-6);
        assert_relative_eq!(a, c, epsilon = 1e-6);
        for heading in [-10.0, -3.3, 0.0, 2.2, 7.5, 100.0] {
            let index = cache.start_index(heading, PI);
            assert!((0.0..=2000.0).contains(&index), "heading {}", heading);
        }
    }

    #[test]
    fn test_advance_wraps() {
        let cache = AngleCache::new(&config(3, PI, 2000));
        assert_relative_eq!(cache.advance(1600.0), 100.0, epsilon = 1e-9);
        assert!(cache.advance(1999.9) < 2000.0);
        assert_relative_eq!(cache.advance(1900.0), 400.0, epsilon = 1e-9);
        assert_relative_eq!(cache.advance(0.0), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_direction_rounds_to_nearest() {
        let cache = AngleCache::new(&config(3, PI, 2000));
        assert_eq!(cache.direction(10.49).index, 10);
        assert_eq!(cache.direction(10.5).index, 11);
        // Rounds up onto the duplicate end slot, which is also horizontal
        let end = cache.direction(1999.7);
        assert_eq!(end.index, 2000);
        assert!(end.horizontal);
        assert_eq!(end.sin, cache.sines[2000]);
    }

    #[test]
    fn test_slot_angle() {
        let cache = AngleCache::new(&config(3, PI, 2000));
        assert_relative_eq!(cache.slot_angle(500), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(cache.slot_angle(2000), TAU, epsilon = 1e-12);
    }
}
