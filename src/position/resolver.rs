use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

use crate::catalog::{SatelliteRecord, SatelliteStore};
use crate::geo::{cartesian_to_geodetic, geodetic_to_cartesian};
use crate::position::ResolveError;
use crate::propagation::Propagator;
use crate::tle::OrbitalElementSet;
use crate::trajectory::{czml, TrajectoryConfig, TrajectorySampler};
use crate::visibility::{self, VisibilityConfig};

#[derive(Clone)]
pub struct PositionResolver {
    store: Arc<dyn SatelliteStore>,
    propagator: Arc<dyn Propagator>,
    visibility: VisibilityConfig,
    trajectory: TrajectoryConfig,
}

impl PositionResolver {
    pub fn new(store: Arc<dyn SatelliteStore>, propagator: Arc<dyn Propagator>) -> Self {
        Self {
            store,
            propagator,
            visibility: VisibilityConfig::default(),
            trajectory: TrajectoryConfig::default(),
        }
    }

    pub fn with_visibility(mut self, visibility: VisibilityConfig) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_trajectory(mut self, trajectory: TrajectoryConfig) -> Self {
        self.trajectory = trajectory;
        self
    }

    pub fn store(&self) -> &Arc<dyn SatelliteStore> {
        &self.store
    }

    pub fn load(&self, satid: u32) -> Result<SatelliteRecord, ResolveError> {
        self.store
            .find_by_id(satid)?
            .ok_or(ResolveError::NotFound(satid))
    }

    fn load_elements(&self, satid: u32) -> Result<(SatelliteRecord, OrbitalElementSet), ResolveError> {
        let record = self.load(satid)?;
        let elements = match record.tle.as_deref() {
            Some(tle) => OrbitalElementSet::parse(tle)?,
            None => return Err(ResolveError::NotFound(satid)),
        };
        Ok((record, elements))
    }

    pub fn resolve_current(&self, satid: u32) -> Result<SatelliteRecord, ResolveError> {
        self.resolve_at(satid, Utc::now())
    }

    /// Propagates the stored TLE to `epoch` and stores the geodetic position.
    /// On any failure the stored record is left as it was.
    pub fn resolve_at(
        &self,
        satid: u32,
        epoch: DateTime<Utc>,
    ) -> Result<SatelliteRecord, ResolveError> {
        let (mut record, elements) = self.load_elements(satid)?;
        let state = self.propagator.propagate(&elements, epoch)?;
        let geodetic = cartesian_to_geodetic(&state.position);

        record.geodetic_coordinates = Some(geodetic.to_lla());
        debug!(
            "Satellite {} at {}: lat {:.4} lon {:.4} alt {:.1} km",
            satid,
            epoch,
            geodetic.latitude_deg(),
            geodetic.longitude_deg(),
            geodetic.altitude_km()
        );
        Ok(self.store.save(record)?)
    }

    pub fn resolve_xyz(&self, satid: u32) -> Result<SatelliteRecord, ResolveError> {
        let mut record = self.load(satid)?;
        let geodetic = record
            .geodetic()
            .ok_or(ResolveError::MissingCoordinates(satid))?;

        record.xyz_coordinates = Some(geodetic_to_cartesian(&geodetic).to_array());
        Ok(self.store.save(record)?)
    }

    pub fn is_visible(&self, satid_a: u32, satid_b: u32) -> Result<bool, ResolveError> {
        let a = self.load(satid_a)?;
        let b = self.load(satid_b)?;
        let a = a.cartesian().ok_or(ResolveError::MissingCoordinates(satid_a))?;
        let b = b.cartesian().ok_or(ResolveError::MissingCoordinates(satid_b))?;
        Ok(visibility::is_visible(&a, &b, &self.visibility))
    }

    pub fn trajectory(&self, satid: u32) -> Result<Value, ResolveError> {
        self.trajectory_from(satid, Utc::now())
    }

    pub fn trajectory_from(&self, satid: u32, start: DateTime<Utc>) -> Result<Value, ResolveError> {
        let (_, elements) = self.load_elements(satid)?;
        let end = start + self.trajectory.duration();
        let samples = TrajectorySampler::new(
            self.propagator.as_ref(),
            &elements,
            start,
            end,
            self.trajectory.step(),
        );
        Ok(czml::write_document(satid, start, end, samples)?)
    }
}
