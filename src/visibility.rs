use serde::Deserialize;

use crate::geo::{CartesianPoint, WGS84_EQUATORIAL_RADIUS_M};

pub const DEFAULT_STEP_M: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub step_m: f64,
    pub earth_radius_m: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            step_m: DEFAULT_STEP_M,
            earth_radius_m: WGS84_EQUATORIAL_RADIUS_M,
        }
    }
}

/// Samples the segment every `step_m` from the lexicographically smaller end,
/// plus the far end. Any sample at or below `earth_radius_m` blocks the view.
pub fn is_visible(a: &CartesianPoint, b: &CartesianPoint, config: &VisibilityConfig) -> bool {
    let (from, to) = if (a.x, a.y, a.z) <= (b.x, b.y, b.z) {
        (a, b)
    } else {
        (b, a)
    };
    let blocked = |p: &CartesianPoint| p.norm() <= config.earth_radius_m;

    let distance = from.distance_to(to);
    if !distance.is_finite() {
        return false;
    }
    if distance == 0.0 {
        return !blocked(from);
    }

    let direction = [
        (to.x - from.x) / distance,
        (to.y - from.y) / distance,
        (to.z - from.z) / distance,
    ];
    let step = if config.step_m > 0.0 {
        config.step_m
    } else {
        distance
    };

    let mut k = 0u64;
    loop {
        let offset = k as f64 * step;
        if offset > distance {
            break;
        }
        let sample = CartesianPoint::new(
            from.x + direction[0] * offset,
            from.y + direction[1] * offset,
            from.z + direction[2] * offset,
        );
        if blocked(&sample) {
            return false;
        }
        k += 1;
    }

    !blocked(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{geodetic_to_cartesian, GeodeticPoint};

    fn at(lat: f64, lon: f64, alt_km: f64) -> CartesianPoint {
        geodetic_to_cartesian(&GeodeticPoint::from_degrees(lat, lon, alt_km))
    }

    #[test]
    fn segment_through_centre_is_blocked() {
        let config = VisibilityConfig::default();
        let a = CartesianPoint::new(7_000_000.0, 0.0, 0.0);
        let b = CartesianPoint::new(-7_000_000.0, 0.0, 0.0);
        assert!(!is_visible(&a, &b, &config));

        let a = at(10.0, 20.0, 20_200.0);
        let b = at(-10.0, -160.0, 20_200.0);
        assert!(!is_visible(&a, &b, &config));
    }

    #[test]
    fn nearby_satellites_see_each_other() {
        let config = VisibilityConfig::default();
        let a = at(0.0, 0.0, 400.0);
        let b = at(0.0, 1.0, 410.0);
        assert!(is_visible(&a, &b, &config));

        let a = at(45.0, 10.0, 550.0);
        let b = at(45.2, 10.1, 35_786.0);
        assert!(is_visible(&a, &b, &config));
    }

    #[test]
    fn geostationary_pair_across_short_arc_is_visible() {
        let config = VisibilityConfig::default();
        assert!(is_visible(&at(0.0, 0.0, 35_786.0), &at(0.0, 90.0, 35_786.0), &config));
    }

    #[test]
    fn radius_equal_to_earth_counts_as_blocked() {
        let config = VisibilityConfig::default();
        let on_surface = CartesianPoint::new(config.earth_radius_m, 0.0, 0.0);
        let above = CartesianPoint::new(config.earth_radius_m + 1_000_000.0, 0.0, 0.0);
        assert!(!is_visible(&on_surface, &above, &config));
        assert!(!is_visible(&above, &on_surface, &config));
        assert!(!is_visible(&on_surface, &on_surface, &config));
        assert!(is_visible(&above, &above, &config));
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let config = VisibilityConfig::default();
        let points = [
            at(0.0, 0.0, 400.0),
            at(0.0, 40.0, 400.0),
            at(0.0, 41.0, 400.0),
            at(51.6, -120.0, 420.0),
            at(-30.0, 60.0, 1_200.0),
            at(0.0, 170.0, 20_200.0),
            at(89.0, 0.0, 800.0),
            CartesianPoint::new(6_378_200.0, 12.0, -3.5),
        ];
        for a in &points {
            for b in &points {
                assert_eq!(
                    is_visible(a, b, &config),
                    is_visible(b, a, &config),
                    "{a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    fn non_finite_coordinates_are_not_visible() {
        let config = VisibilityConfig::default();
        let a = at(0.0, 0.0, 400.0);
        let nan = CartesianPoint::new(f64::NAN, 0.0, 7_000_000.0);
        let inf = CartesianPoint::new(f64::INFINITY, 0.0, 0.0);
        assert!(!is_visible(&a, &nan, &config));
        assert!(!is_visible(&nan, &a, &config));
        assert!(!is_visible(&a, &inf, &config));
    }

    #[test]
    fn grazing_chord_is_caught_by_fine_step() {
        // Two LEO satellites 40 degrees apart at 400 km: the chord dips below
        // the surface, which the 10 km step must catch.
        let coarse = VisibilityConfig {
            step_m: 1.0e7,
            ..VisibilityConfig::default()
        };
        let a = at(0.0, 0.0, 400.0);
        let b = at(0.0, 42.0, 400.0);
        assert!(!is_visible(&a, &b, &VisibilityConfig::default()));
        assert!(is_visible(&a, &b, &coarse));
    }
}
