use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::propagation::{PropagationError, Propagator};
use crate::tle::OrbitalElementSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub offset_s: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Samples `start, start + step, ...` up to and including `end`, then stays exhausted.
pub struct TrajectorySampler<'a> {
    propagator: &'a dyn Propagator,
    elements: &'a OrbitalElementSet,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
    cursor: Option<DateTime<Utc>>,
}

impl<'a> TrajectorySampler<'a> {
    pub fn new(
        propagator: &'a dyn Propagator,
        elements: &'a OrbitalElementSet,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: Duration,
    ) -> Self {
        Self {
            propagator,
            elements,
            start,
            end,
            step,
            cursor: Some(start),
        }
    }
}

impl Iterator for TrajectorySampler<'_> {
    type Item = Result<TrajectorySample, PropagationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        if cursor > self.end {
            return None;
        }

        // A non-positive step would never reach `end`; emit the start only.
        if self.step > Duration::zero() {
            self.cursor = Some(cursor + self.step);
        }

        let offset_s = (cursor - self.start).num_milliseconds() as f64 / 1000.0;
        match self.propagator.propagate(self.elements, cursor) {
            Ok(state) => Some(Ok(TrajectorySample {
                offset_s,
                x: state.position.x,
                y: state.position.y,
                z: state.position.z,
            })),
            Err(e) => {
                self.cursor = None;
                Some(Err(e))
            }
        }
    }
}
