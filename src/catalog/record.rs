use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geo::{CartesianPoint, GeodeticPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteRecord {
    pub satid: u32,
    pub satname: String,
    #[serde(default)]
    pub tle: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<f64>>)]
    pub geodetic_coordinates: Option<[f64; 3]>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<f64>>)]
    pub xyz_coordinates: Option<[f64; 3]>,
}

impl SatelliteRecord {
    pub fn new(satid: u32, satname: impl Into<String>) -> Self {
        Self {
            satid,
            satname: satname.into(),
            tle: None,
            geodetic_coordinates: None,
            xyz_coordinates: None,
        }
    }

    pub fn geodetic(&self) -> Option<GeodeticPoint> {
        self.geodetic_coordinates.map(GeodeticPoint::from_lla)
    }

    pub fn cartesian(&self) -> Option<CartesianPoint> {
        self.xyz_coordinates.map(CartesianPoint::from_array)
    }
}
