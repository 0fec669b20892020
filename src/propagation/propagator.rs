use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};

use super::teme::{teme_to_ecef_position, teme_to_ecef_velocity};
use super::{PropagationError, Propagator, StateVector};
use crate::geo::CartesianPoint;
use crate::tle::OrbitalElementSet;

pub const DEFAULT_MAX_EPOCH_OFFSET_DAYS: f64 = 365.0;

#[derive(Debug, Clone)]
pub struct Sgp4Propagator {
    max_epoch_offset_days: f64,
}

impl Default for Sgp4Propagator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EPOCH_OFFSET_DAYS)
    }
}

impl Sgp4Propagator {
    pub fn new(max_epoch_offset_days: f64) -> Self {
        Self {
            max_epoch_offset_days,
        }
    }
}

impl Propagator for Sgp4Propagator {
    fn propagate(
        &self,
        elements: &OrbitalElementSet,
        epoch: DateTime<Utc>,
    ) -> Result<StateVector, PropagationError> {
        let offset_days = (epoch - elements.epoch).num_seconds() as f64 / 86_400.0;
        if offset_days.abs() > self.max_epoch_offset_days {
            return Err(PropagationError::EpochOutOfRange {
                epoch,
                offset_days,
                limit_days: self.max_epoch_offset_days,
            });
        }

        let sgp4_elements = Elements::from_tle(
            elements.object_name.clone(),
            elements.line1().as_bytes(),
            elements.line2().as_bytes(),
        )
        .map_err(|e| PropagationError::Elements(e.to_string()))?;
        let constants = Constants::from_elements(&sgp4_elements)
            .map_err(|e| PropagationError::Elements(e.to_string()))?;

        let timestamp = epoch.naive_utc();
        let minutes = sgp4_elements
            .datetime_to_minutes_since_epoch(&timestamp)
            .map_err(|e| PropagationError::Propagation(e.to_string()))?;
        let prediction = constants
            .propagate(minutes)
            .map_err(|e| PropagationError::Propagation(e.to_string()))?;

        let sidereal =
            sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&timestamp));
        let position = teme_to_ecef_position(prediction.position, sidereal);
        let velocity = teme_to_ecef_velocity(prediction.position, prediction.velocity, sidereal);

        Ok(StateVector {
            position: CartesianPoint::from_km(position),
            velocity: velocity.map(|v| v * 1000.0),
        })
    }
}
