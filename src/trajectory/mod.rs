pub mod czml;
mod sampler;

use serde::Deserialize;
use std::time::Duration;

use crate::config::deserialize_duration;

pub use sampler::{TrajectorySample, TrajectorySampler};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub step: Duration,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(90 * 60),
            step: Duration::from_secs(60),
        }
    }
}

impl TrajectoryConfig {
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.duration.as_millis() as i64)
    }

    pub fn step(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.step.as_millis() as i64)
    }
}
