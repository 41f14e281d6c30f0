//! Circular orbit propagation
//!
//! The angle advances at a flat mean-motion rate sqrt(μ/r³). This is exact only
//! for an ideal circular Keplerian orbit; it does not integrate velocity or
//! acceleration, so it is not a general two-body propagator.

use crate::params::OrbitParameters;
use spacesim_core::coordinates::CartesianPosition;
use std::f64::consts::PI;

/// Planar circular orbit about the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularOrbit {
    params: OrbitParameters,
    /// Cached per-frame increment, constant for the run
    step: f64,
}

impl CircularOrbit {
    pub fn new(params: OrbitParameters) -> Self {
        Self { params, step: params.angular_step() }
    }

    pub fn params(&self) -> &OrbitParameters {
        &self.params
    }

    /// Position on the orbit at angle `theta` (radians, not normalized)
    pub fn propagate(&self, theta: f64) -> CartesianPosition {
        let r = self.params.radius();
        CartesianPosition::new(r * theta.cos(), r * theta.sin(), 0.0)
    }

    /// Angle one time step after `theta`
    pub fn advance(&self, theta: f64) -> f64 {
        theta + self.step
    }

    /// Angle swept per frame (radians)
    pub fn angular_step(&self) -> f64 {
        self.step
    }

    /// Mean motion (radians per second)
    pub fn mean_motion(&self) -> f64 {
        self.params.mean_motion()
    }

    /// Orbital period (seconds)
    pub fn period(&self) -> f64 {
        2.0 * PI / self.mean_motion()
    }

    /// Circular orbital speed sqrt(μ/r) (m/s)
    pub fn orbital_speed(&self) -> f64 {
        (self.params.gravitational_parameter() / self.params.radius()).sqrt()
    }

    /// Frames needed to complete one revolution
    pub fn frames_per_orbit(&self) -> f64 {
        self.period() / self.params.time_step()
    }
}

impl From<OrbitParameters> for CircularOrbit {
    fn from(params: OrbitParameters) -> Self {
        Self::new(params)
    }
}

impl Default for CircularOrbit {
    fn default() -> Self {
        Self::new(OrbitParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_STEP: f64 = 0.019_964_969_321_288_724;

    #[test]
    fn test_propagate_stays_on_circle() {
        let orbit = CircularOrbit::default();
        let r = orbit.params().radius();

        for theta in [0.0, 0.3, PI / 2.0, PI, -2.7, 17.0, 1.0e4, -1.0e6] {
            let pos = orbit.propagate(theta);
            let r2 = pos.x * pos.x + pos.y * pos.y;
            assert!((r2 - r * r).abs() < r * r * 1e-12, "theta={theta}: r²={r2}");
            assert_eq!(pos.z, 0.0);
        }
    }

    #[test]
    fn test_propagate_is_deterministic() {
        let orbit = CircularOrbit::default();
        for theta in [0.0, 0.123_456_789, 42.0] {
            let a = orbit.propagate(theta);
            let b = orbit.propagate(theta);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }

    #[test]
    fn test_advance_is_constant_step() {
        let orbit = CircularOrbit::default();
        assert!((orbit.angular_step() - EXPECTED_STEP).abs() < 1e-15);

        for theta in [0.0, 1.0, 5.5, 100.0] {
            let delta = orbit.advance(theta) - theta;
            assert!((delta - EXPECTED_STEP).abs() < 1e-12, "delta={delta}");
        }
    }

    #[test]
    fn test_advance_sequence_strictly_increases() {
        let orbit = CircularOrbit::default();
        let mut theta = 0.0;
        for _ in 0..10_000 {
            let next = orbit.advance(theta);
            assert!(next > theta);
            theta = next;
        }
    }

    #[test]
    fn test_seed_scenario() {
        let orbit = CircularOrbit::default();

        let p0 = orbit.propagate(0.0);
        assert_eq!(p0.as_tuple(), (1000.0, 0.0, 0.0));

        let theta1 = orbit.advance(0.0);
        assert!((theta1 - 0.019_965).abs() < 1e-6);

        let p1 = orbit.propagate(theta1);
        assert!((p1.x - 999.801).abs() < 0.001, "x={}", p1.x);
        assert!((p1.y - 19.964).abs() < 0.001, "y={}", p1.y);
        assert_eq!(p1.z, 0.0);
    }

    #[test]
    fn test_derived_quantities() {
        let orbit = CircularOrbit::default();
        let n = orbit.mean_motion();

        assert!((orbit.period() * n - 2.0 * PI).abs() < 1e-12);
        // v = n·r on a circle
        assert!((orbit.orbital_speed() - n * 1000.0).abs() < 1e-9);
        // dt = 1 s, so frames per orbit equals the period in seconds
        assert!((orbit.frames_per_orbit() - orbit.period()).abs() < 1e-9);
        assert!((orbit.frames_per_orbit() - 314.71).abs() < 0.01);
    }
}
