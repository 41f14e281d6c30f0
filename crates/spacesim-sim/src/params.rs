//! Fixed orbital parameters for a run

use crate::error::{require_positive, SimError, SimResult};
use serde::{Deserialize, Serialize};
use spacesim_core::constants::{MU_SEED, ORBIT_RADIUS, TIME_STEP};

/// Circular orbit parameters, validated on construction and immutable afterwards
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOrbitParameters")]
pub struct OrbitParameters {
    /// Orbit radius (meters)
    radius: f64,
    /// Gravitational parameter μ of the central body (m³/s²)
    gravitational_parameter: f64,
    /// Time between frames (seconds)
    time_step: f64,
}

impl OrbitParameters {
    pub fn new(radius: f64, gravitational_parameter: f64, time_step: f64) -> SimResult<Self> {
        let params = Self {
            radius: require_positive("radius", radius)?,
            gravitational_parameter: require_positive(
                "gravitational_parameter",
                gravitational_parameter,
            )?,
            time_step: require_positive("time_step", time_step)?,
        };

        // Tiny radii can still overflow r³ or μ/r³ even when each input is sane
        let step = params.angular_step();
        if !(step.is_finite() && step > 0.0) {
            return Err(SimError::DegenerateOrbit(step));
        }

        Ok(params)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Mean motion sqrt(μ / r³) (radians per second)
    pub fn mean_motion(&self) -> f64 {
        (self.gravitational_parameter / self.radius.powi(3)).sqrt()
    }

    /// Angle swept per frame (radians)
    pub fn angular_step(&self) -> f64 {
        self.time_step * self.mean_motion()
    }
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self {
            radius: ORBIT_RADIUS,
            gravitational_parameter: MU_SEED,
            time_step: TIME_STEP,
        }
    }
}

/// Unvalidated wire form; every field falls back to the seed run value
#[derive(Deserialize)]
#[serde(default)]
struct RawOrbitParameters {
    radius: f64,
    gravitational_parameter: f64,
    time_step: f64,
}

impl Default for RawOrbitParameters {
    fn default() -> Self {
        let d = OrbitParameters::default();
        Self {
            radius: d.radius,
            gravitational_parameter: d.gravitational_parameter,
            time_step: d.time_step,
        }
    }
}

impl TryFrom<RawOrbitParameters> for OrbitParameters {
    type Error = SimError;

    fn try_from(raw: RawOrbitParameters) -> SimResult<Self> {
        Self::new(raw.radius, raw.gravitational_parameter, raw.time_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_seed_run() {
        let p = OrbitParameters::default();
        assert_eq!(p.radius(), 1000.0);
        assert_eq!(p.gravitational_parameter(), 398_600.0);
        assert_eq!(p.time_step(), 1.0);
        assert_eq!(OrbitParameters::new(1000.0, 398_600.0, 1.0).unwrap(), p);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        for (r, mu, dt) in [
            (0.0, 398_600.0, 1.0),
            (-1000.0, 398_600.0, 1.0),
            (1000.0, 0.0, 1.0),
            (1000.0, -5.0, 1.0),
            (1000.0, 398_600.0, 0.0),
            (1000.0, 398_600.0, -1.0),
            (f64::NAN, 398_600.0, 1.0),
            (1000.0, f64::INFINITY, 1.0),
        ] {
            let err = OrbitParameters::new(r, mu, dt).unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter { .. }), "{r} {mu} {dt}: {err}");
        }
    }

    #[test]
    fn test_error_names_offending_field() {
        let err = OrbitParameters::new(0.0, 398_600.0, 1.0).unwrap_err();
        match err {
            SimError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "radius");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_vanishing_radius_is_degenerate() {
        // Positive but r³ underflows to zero
        let err = OrbitParameters::new(1e-200, 398_600.0, 1.0).unwrap_err();
        assert!(matches!(err, SimError::DegenerateOrbit(_)));
    }

    #[test]
    fn test_deserialize_validates() {
        let p: OrbitParameters = serde_json::from_str(r#"{"radius": 2000.0}"#).unwrap();
        assert_eq!(p.radius(), 2000.0);
        assert_eq!(p.gravitational_parameter(), MU_SEED);

        let bad = serde_json::from_str::<OrbitParameters>(r#"{"time_step": -1.0}"#);
        assert!(bad.is_err());
    }
}
