//! Circular-orbit pose generation for synthetic spacecraft imagery

pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod frames;
pub mod orbit;
pub mod params;
pub mod validation;

pub use camera::{CameraPose, ChaseCamera, EulerAngles};
pub use clock::FrameClock;
pub use config::RunConfig;
pub use error::{SimError, SimResult};
pub use frames::{generate_frames, FrameGenerator, FrameRecord, FrameState};
pub use orbit::CircularOrbit;
pub use params::OrbitParameters;
pub use validation::{validate_trajectory, TrajectoryReport};
