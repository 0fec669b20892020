use chrono::{DateTime, Utc};

use super::{PropagationError, Propagator, StateVector};
use crate::geo::{CartesianPoint, WGS84_EQUATORIAL_RADIUS_M};
use crate::tle::OrbitalElementSet;

pub const STUB_ALTITUDE_M: f64 = 400_000.0;
const STUB_PERIOD_S: f64 = 5_400.0;

pub struct StubPropagator;

impl Propagator for StubPropagator {
    fn propagate(
        &self,
        elements: &OrbitalElementSet,
        epoch: DateTime<Utc>,
    ) -> Result<StateVector, PropagationError> {
        let radius = WGS84_EQUATORIAL_RADIUS_M + STUB_ALTITUDE_M;
        let omega = std::f64::consts::TAU / STUB_PERIOD_S;
        let t = (epoch - elements.epoch).num_milliseconds() as f64 / 1000.0;
        let angle = omega * t;
        Ok(StateVector {
            position: CartesianPoint::new(radius * angle.cos(), radius * angle.sin(), 0.0),
            velocity: [
                -radius * omega * angle.sin(),
                radius * omega * angle.cos(),
                0.0,
            ],
        })
    }
}

pub struct FailingPropagator;

impl Propagator for FailingPropagator {
    fn propagate(
        &self,
        _elements: &OrbitalElementSet,
        _epoch: DateTime<Utc>,
    ) -> Result<StateVector, PropagationError> {
        Err(PropagationError::Propagation("degenerate orbit".into()))
    }
}
