//! Run configuration

use crate::camera::ChaseCamera;
use crate::clock::FrameClock;
use crate::error::{SimError, SimResult};
use crate::orbit::CircularOrbit;
use crate::params::OrbitParameters;
use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use spacesim_core::constants::NUM_FRAMES;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Everything needed to generate one run; defaults reproduce the seed dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub orbit: OrbitParameters,
    pub camera: ChaseCamera,
    pub num_frames: u64,
    /// Epoch of frame 0, e.g. "2000-01-01T12:00:00 UTC"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_epoch: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitParameters::default(),
            camera: ChaseCamera::default(),
            num_frames: NUM_FRAMES as u64,
            start_epoch: None,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.start_epoch()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.start_epoch()?;
        tracing::info!("Loaded run config from {}", path.display());
        Ok(config)
    }

    pub fn orbit(&self) -> CircularOrbit {
        self.orbit.into()
    }

    /// Parsed start epoch, if one is configured
    pub fn start_epoch(&self) -> SimResult<Option<Epoch>> {
        self.start_epoch
            .as_deref()
            .map(|s| Epoch::from_str(s).map_err(|e| SimError::InvalidEpoch(format!("{s}: {e}"))))
            .transpose()
    }

    pub fn clock(&self) -> SimResult<FrameClock> {
        let clock = FrameClock::new(self.orbit.time_step());
        Ok(match self.start_epoch()? {
            Some(epoch) => clock.starting_at(epoch),
            None => clock,
        })
    }
}
