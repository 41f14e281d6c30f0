//! Trailing chase camera

use crate::error::{require_non_negative, SimError, SimResult};
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use spacesim_core::constants::{CAMERA_OFFSET_ABOVE, CAMERA_OFFSET_BEHIND, CAMERA_PITCH};
use spacesim_core::coordinates::CartesianPosition;
use std::f64::consts::PI;

/// Euler angles in radians, applied in X, Y, Z order about fixed axes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about X
    pub pitch: f64,
    /// Rotation about Y
    pub roll: f64,
    /// Rotation about Z
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Rotation matrix Rz(yaw) · Ry(roll) · Rx(pitch)
    pub fn to_rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.yaw)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.roll)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.pitch)
    }
}

/// Camera placement for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub location: CartesianPosition,
    pub orientation: EulerAngles,
}

impl CameraPose {
    /// Unit view axis in the orbit frame; the unrotated camera looks along -Z
    pub fn view_direction(&self) -> Vector3<f64> {
        self.orientation.to_rotation() * -Vector3::z()
    }
}

/// Camera that trails the spacecraft at fixed offsets
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChaseCamera")]
pub struct ChaseCamera {
    /// Distance behind the spacecraft along -Y (meters)
    offset_behind: f64,
    /// Height above the spacecraft along +Z (meters)
    offset_above: f64,
}

impl ChaseCamera {
    pub fn new(offset_behind: f64, offset_above: f64) -> SimResult<Self> {
        Ok(Self {
            offset_behind: require_non_negative("offset_behind", offset_behind)?,
            offset_above: require_non_negative("offset_above", offset_above)?,
        })
    }

    pub fn offset_behind(&self) -> f64 {
        self.offset_behind
    }

    pub fn offset_above(&self) -> f64 {
        self.offset_above
    }

    /// Pose viewing a spacecraft at `position` whose orbit angle is `theta`
    pub fn camera_pose(&self, position: CartesianPosition, theta: f64) -> CameraPose {
        CameraPose {
            location: position.offset(0.0, -self.offset_behind, self.offset_above),
            orientation: EulerAngles::new(CAMERA_PITCH, 0.0, theta + PI),
        }
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset_behind: CAMERA_OFFSET_BEHIND,
            offset_above: CAMERA_OFFSET_ABOVE,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawChaseCamera {
    offset_behind: f64,
    offset_above: f64,
}

impl Default for RawChaseCamera {
    fn default() -> Self {
        Self {
            offset_behind: CAMERA_OFFSET_BEHIND,
            offset_above: CAMERA_OFFSET_ABOVE,
        }
    }
}

impl TryFrom<RawChaseCamera> for ChaseCamera {
    type Error = SimError;

    fn try_from(raw: RawChaseCamera) -> SimResult<Self> {
        Self::new(raw.offset_behind, raw.offset_above)
    }
}
