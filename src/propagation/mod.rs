mod error;
mod propagator;
#[cfg(test)]
pub(crate) mod stub;
mod teme;

use chrono::{DateTime, Utc};

use crate::geo::CartesianPoint;
use crate::tle::OrbitalElementSet;

pub use error::PropagationError;
pub use propagator::{Sgp4Propagator, DEFAULT_MAX_EPOCH_OFFSET_DAYS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: CartesianPoint,
    pub velocity: [f64; 3],
}

pub trait Propagator: Send + Sync {
    fn propagate(
        &self,
        elements: &OrbitalElementSet,
        epoch: DateTime<Utc>,
    ) -> Result<StateVector, PropagationError>;
}
