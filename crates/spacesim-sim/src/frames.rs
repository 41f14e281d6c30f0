//! Per-frame state generation

use crate::camera::{CameraPose, ChaseCamera};
use crate::orbit::CircularOrbit;
use serde::{Deserialize, Serialize};
use spacesim_core::coordinates::CartesianPosition;

/// Spacecraft state at one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub frame_index: u64,
    /// Elapsed time, frame_index × time_step (seconds)
    pub time: f64,
    /// Accumulated orbit angle (radians, not normalized)
    pub theta: f64,
    pub position: CartesianPosition,
}

impl FrameState {
    pub fn camera_pose(&self, camera: &ChaseCamera) -> CameraPose {
        camera.camera_pose(self.position, self.theta)
    }

    pub fn record(&self) -> FrameRecord {
        FrameRecord::from(self)
    }
}

/// Row handed to the external renderer/logger
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<&FrameState> for FrameRecord {
    fn from(state: &FrameState) -> Self {
        Self {
            frame: state.frame_index,
            time: state.time,
            x: state.position.x,
            y: state.position.y,
            z: state.position.z,
        }
    }
}

/// Yields frames `0..num_frames`, carrying the running angle from frame to frame
#[derive(Clone, Debug)]
pub struct FrameGenerator {
    orbit: CircularOrbit,
    num_frames: u64,
    next_index: u64,
    theta: f64,
}

impl FrameGenerator {
    pub fn new(orbit: CircularOrbit, num_frames: u64) -> Self {
        Self { orbit, num_frames, next_index: 0, theta: 0.0 }
    }

    pub fn orbit(&self) -> &CircularOrbit {
        &self.orbit
    }

    /// Angle the next frame will be rendered at
    pub fn theta(&self) -> f64 {
        self.theta
    }
}

impl Iterator for FrameGenerator {
    type Item = FrameState;

    fn next(&mut self) -> Option<FrameState> {
        if self.next_index >= self.num_frames {
            return None;
        }

        let frame_index = self.next_index;
        let state = FrameState {
            frame_index,
            time: frame_index as f64 * self.orbit.params().time_step(),
            theta: self.theta,
            position: self.orbit.propagate(self.theta),
        };

        self.theta = self.orbit.advance(self.theta);
        self.next_index += 1;

        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.num_frames - self.next_index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameGenerator {}

/// Generate a whole run
pub fn generate_frames(orbit: CircularOrbit, num_frames: u64) -> Vec<FrameState> {
    let frames: Vec<_> = FrameGenerator::new(orbit, num_frames).collect();
    tracing::debug!(
        "Generated {} frames, final theta {:.6} rad",
        frames.len(),
        frames.last().map_or(0.0, |f| f.theta)
    );
    frames
}
