use std::f64::consts::FRAC_PI_2;

/// Spacecraft orbit radius for the seed run (meters)
pub const ORBIT_RADIUS: f64 = 1000.0;

/// Gravitational parameter for the seed run (m³/s²)
pub const MU_SEED: f64 = 398_600.0;

/// Simulation time step per frame (seconds)
pub const TIME_STEP: f64 = 1.0;

/// Frames rendered in a seed run
pub const NUM_FRAMES: usize = 120;

/// Chase camera distance behind the spacecraft along -Y (meters)
pub const CAMERA_OFFSET_BEHIND: f64 = 10.0;

/// Chase camera height above the orbital plane (meters)
pub const CAMERA_OFFSET_ABOVE: f64 = 2.0;

/// Fixed camera pitch about the X axis (radians)
pub const CAMERA_PITCH: f64 = FRAC_PI_2;
