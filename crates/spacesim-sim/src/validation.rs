//! Consistency checks for a generated trajectory

use crate::frames::FrameState;
use crate::orbit::CircularOrbit;

/// Worst-case deviations of a run from the circular-orbit invariants
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryReport {
    pub num_frames: usize,
    /// max | |p|_xy - r | (meters)
    pub max_radius_error: f64,
    /// max |z| (meters)
    pub max_abs_z: f64,
    /// max |Δθ - step| between consecutive frames (radians)
    pub max_step_error: f64,
    /// max |time - index·dt| (seconds)
    pub max_time_error: f64,
    /// Frame indices count up from 0 without gaps
    pub indices_contiguous: bool,
    pub theta_strictly_increasing: bool,
}

impl TrajectoryReport {
    /// Radius error is compared relative to the orbit radius
    pub fn passes(&self, orbit: &CircularOrbit, tolerance: f64) -> bool {
        self.indices_contiguous
            && self.theta_strictly_increasing
            && self.max_radius_error <= tolerance * orbit.params().radius()
            && self.max_abs_z <= tolerance
            && self.max_step_error <= tolerance
            && self.max_time_error <= tolerance
    }
}

/// Check `frames` against the orbit they were generated from
pub fn validate_trajectory(orbit: &CircularOrbit, frames: &[FrameState]) -> TrajectoryReport {
    let r = orbit.params().radius();
    let dt = orbit.params().time_step();
    let step = orbit.angular_step();

    let mut report = TrajectoryReport {
        num_frames: frames.len(),
        max_radius_error: 0.0,
        max_abs_z: 0.0,
        max_step_error: 0.0,
        max_time_error: 0.0,
        indices_contiguous: true,
        theta_strictly_increasing: true,
    };

    for (i, frame) in frames.iter().enumerate() {
        if frame.frame_index != i as u64 {
            report.indices_contiguous = false;
        }

        let radius_error = (frame.position.planar_radius() - r).abs();
        report.max_radius_error = report.max_radius_error.max(radius_error);
        report.max_abs_z = report.max_abs_z.max(frame.position.z.abs());

        let time_error = (frame.time - frame.frame_index as f64 * dt).abs();
        report.max_time_error = report.max_time_error.max(time_error);
    }

    for pair in frames.windows(2) {
        let delta = pair[1].theta - pair[0].theta;
        if delta <= 0.0 {
            tracing::debug!(
                "Theta not increasing at frame {}: {} -> {}",
                pair[1].frame_index,
                pair[0].theta,
                pair[1].theta
            );
            report.theta_strictly_increasing = false;
        }
        report.max_step_error = report.max_step_error.max((delta - step).abs());
    }

    report
}
