//! Frame timing

use hifitime::{Duration, Epoch};

/// Maps frame indices to elapsed and absolute time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    /// Seconds between frames
    time_step: f64,
    /// Absolute time of frame 0, if anchored
    start: Option<Epoch>,
}

impl FrameClock {
    pub fn new(time_step: f64) -> Self {
        Self { time_step, start: None }
    }

    /// Anchor frame 0 at an absolute epoch
    pub fn starting_at(mut self, epoch: Epoch) -> Self {
        self.start = Some(epoch);
        self
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn start(&self) -> Option<Epoch> {
        self.start
    }

    /// Elapsed seconds at `frame`
    pub fn time_at(&self, frame: u64) -> f64 {
        frame as f64 * self.time_step
    }

    /// Elapsed time at `frame` as a duration
    pub fn elapsed_at(&self, frame: u64) -> Duration {
        Duration::from_seconds(self.time_at(frame))
    }

    /// Absolute epoch of `frame`, when anchored
    pub fn epoch_at(&self, frame: u64) -> Option<Epoch> {
        self.start.map(|start| start + self.elapsed_at(frame))
    }

    /// Total simulated time covered by `num_frames` frames
    pub fn run_duration(&self, num_frames: u64) -> Duration {
        self.elapsed_at(num_frames)
    }
}
