use serde::Serialize;

pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

const MAX_ITERATIONS: usize = 10;
const LATITUDE_TOLERANCE_RAD: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    pub latitude_rad: f64,
    pub longitude_rad: f64,
    pub altitude_m: f64,
}

impl GeodeticPoint {
    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64, altitude_km: f64) -> Self {
        Self {
            latitude_rad: latitude_deg.to_radians(),
            longitude_rad: longitude_deg.to_radians(),
            altitude_m: altitude_km * 1000.0,
        }
    }

    pub fn from_lla(lla: [f64; 3]) -> Self {
        Self::from_degrees(lla[0], lla[1], lla[2])
    }

    pub fn to_lla(&self) -> [f64; 3] {
        [self.latitude_deg(), self.longitude_deg(), self.altitude_km()]
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_rad.to_degrees()
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_rad.to_degrees()
    }

    pub fn altitude_km(&self) -> f64 {
        self.altitude_m / 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }

    pub fn from_km(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0] * 1000.0, xyz[1] * 1000.0, xyz[2] * 1000.0)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &CartesianPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

fn eccentricity_squared() -> f64 {
    WGS84_FLATTENING * (2.0 - WGS84_FLATTENING)
}

pub fn geodetic_to_cartesian(point: &GeodeticPoint) -> CartesianPoint {
    let a = WGS84_EQUATORIAL_RADIUS_M;
    let one_minus_f = 1.0 - WGS84_FLATTENING;
    let sin_lat = point.latitude_rad.sin();
    let cos_lat = point.latitude_rad.cos();
    let sin_lon = point.longitude_rad.sin();
    let cos_lon = point.longitude_rad.cos();

    // Normal radius of curvature factor.
    let c = 1.0 / (cos_lat * cos_lat + one_minus_f * one_minus_f * sin_lat * sin_lat).sqrt();
    let s = one_minus_f * one_minus_f * c;
    let h = point.altitude_m;

    CartesianPoint {
        x: (a * c + h) * cos_lat * cos_lon,
        y: (a * c + h) * cos_lat * sin_lon,
        z: (a * s + h) * sin_lat,
    }
}

pub fn cartesian_to_geodetic(point: &CartesianPoint) -> GeodeticPoint {
    let a = WGS84_EQUATORIAL_RADIUS_M;
    let e2 = eccentricity_squared();
    let p = (point.x * point.x + point.y * point.y).sqrt();
    let longitude = point.y.atan2(point.x);

    let mut latitude = point.z.atan2(p * (1.0 - e2));
    for _ in 0..MAX_ITERATIONS {
        let sin_lat = latitude.sin();
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let next = (point.z + e2 * n * sin_lat).atan2(p);
        let converged = (next - latitude).abs() < LATITUDE_TOLERANCE_RAD;
        latitude = next;
        if converged {
            break;
        }
    }

    let sin_lat = latitude.sin();
    let altitude =
        p * latitude.cos() + point.z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt();

    GeodeticPoint {
        latitude_rad: latitude,
        longitude_rad: longitude,
        altitude_m: altitude,
    }
}
