use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::tle::parsing::{checksum, split_tle_lines};
use crate::tle::TleError;

const LINE_LENGTH: usize = 69;

// 1-indexed inclusive column ranges of the standard two-line layout.
const CATALOG_NUMBER: (usize, usize) = (3, 7);
const EPOCH: (usize, usize) = (19, 32);
const DRAG_TERM: (usize, usize) = (54, 61);
const INCLINATION: (usize, usize) = (9, 16);
const RIGHT_ASCENSION: (usize, usize) = (18, 25);
const ECCENTRICITY: (usize, usize) = (27, 33);
const ARGUMENT_OF_PERIGEE: (usize, usize) = (35, 42);
const MEAN_ANOMALY: (usize, usize) = (44, 51);
const MEAN_MOTION: (usize, usize) = (53, 63);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalElementSet {
    pub object_name: Option<String>,
    pub catalog_number: u32,
    pub epoch: DateTime<Utc>,
    pub inclination_deg: f64,
    pub right_ascension_deg: f64,
    pub eccentricity: f64,
    pub argument_of_perigee_deg: f64,
    pub mean_anomaly_deg: f64,
    pub mean_motion_rev_per_day: f64,
    pub drag_term: f64,
    #[serde(skip)]
    line1: String,
    #[serde(skip)]
    line2: String,
}

impl OrbitalElementSet {
    pub fn parse(tle: &str) -> Result<Self, TleError> {
        let (name, line1, line2) = split_tle_lines(tle)?;
        Self::from_lines(name, &line1, &line2)
    }

    pub fn from_lines(
        object_name: Option<String>,
        line1: &str,
        line2: &str,
    ) -> Result<Self, TleError> {
        let line1 = line1.trim();
        let line2 = line2.trim();
        validate_line(line1, 1)?;
        validate_line(line2, 2)?;

        let catalog_number = parse_catalog_number(line1, 1)?;
        let second = parse_catalog_number(line2, 2)?;
        if catalog_number != second {
            return Err(TleError::CatalogMismatch(catalog_number, second));
        }

        let epoch = parse_epoch(field(line1, 1, EPOCH)?)
            .ok_or_else(|| TleError::malformed(1, "invalid epoch"))?;
        let drag_term = parse_implied_decimal(field(line1, 1, DRAG_TERM)?)
            .ok_or_else(|| TleError::malformed(1, "invalid drag term"))?;

        let eccentricity = parse_eccentricity(field(line2, 2, ECCENTRICITY)?)
            .ok_or_else(|| TleError::malformed(2, "invalid eccentricity"))?;

        Ok(OrbitalElementSet {
            object_name,
            catalog_number,
            epoch,
            inclination_deg: parse_line2_number(line2, INCLINATION, "inclination")?,
            right_ascension_deg: parse_line2_number(line2, RIGHT_ASCENSION, "right ascension")?,
            eccentricity,
            argument_of_perigee_deg: parse_line2_number(
                line2,
                ARGUMENT_OF_PERIGEE,
                "argument of perigee",
            )?,
            mean_anomaly_deg: parse_line2_number(line2, MEAN_ANOMALY, "mean anomaly")?,
            mean_motion_rev_per_day: parse_line2_number(line2, MEAN_MOTION, "mean motion")?,
            drag_term,
            line1: line1.to_string(),
            line2: line2.to_string(),
        })
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    pub fn to_tle_string(&self) -> String {
        format!("{}\n{}", self.line1, self.line2)
    }
}

fn validate_line(line: &str, number: u8) -> Result<(), TleError> {
    if !line.is_ascii() {
        return Err(TleError::malformed(number, "non-ascii characters"));
    }
    if line.len() != LINE_LENGTH {
        return Err(TleError::malformed(
            number,
            format!("expected {} characters, found {}", LINE_LENGTH, line.len()),
        ));
    }
    if !line.starts_with(&format!("{} ", number)) {
        return Err(TleError::malformed(
            number,
            format!("line must start with '{} '", number),
        ));
    }

    let expected = line[LINE_LENGTH - 1..]
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(|| TleError::malformed(number, "checksum column is not a digit"))?;
    let computed = checksum(line);
    if expected != computed {
        return Err(TleError::Checksum {
            line: number,
            expected,
            computed,
        });
    }
    Ok(())
}

fn field(line: &str, number: u8, (first, last): (usize, usize)) -> Result<&str, TleError> {
    line.get(first - 1..last)
        .map(str::trim)
        .ok_or_else(|| TleError::malformed(number, format!("columns {first}-{last} missing")))
}

fn parse_catalog_number(line: &str, number: u8) -> Result<u32, TleError> {
    field(line, number, CATALOG_NUMBER)?
        .parse()
        .map_err(|_| TleError::malformed(number, "invalid catalog number"))
}

fn parse_line2_number(line: &str, columns: (usize, usize), name: &str) -> Result<f64, TleError> {
    let raw = field(line, 2, columns)?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TleError::malformed(2, format!("invalid {name}: '{raw}'")))
}

/// Seven digits with an implied leading "0.".
fn parse_eccentricity(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().map(|v| v as f64 / 1e7)
}

/// Assumed-decimal exponent notation, e.g. ` 25659-3` is 0.25659e-3.
fn parse_implied_decimal(raw: &str) -> Option<f64> {
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let rest = rest.trim_start_matches('.');

    let (mantissa, exponent) = match rest.rfind(['-', '+']) {
        Some(idx) if idx > 0 => (&rest[..idx], rest[idx..].parse::<i32>().ok()?),
        _ => (rest, 0),
    };
    if mantissa.is_empty() || !mantissa.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mantissa: f64 = format!("0.{mantissa}").parse().ok()?;
    Some(sign * mantissa * 10f64.powi(exponent))
}

/// `YYDDD.DDDDDDDD`; two-digit years below 57 belong to the 2000s.
fn parse_epoch(raw: &str) -> Option<DateTime<Utc>> {
    let year: i32 = raw.get(..2)?.parse().ok()?;
    let day: f64 = raw.get(2..)?.parse().ok()?;
    if !(1.0..367.0).contains(&day) {
        return None;
    }

    let year = if year < 57 { 2000 + year } else { 1900 + year };
    let start = NaiveDate::from_yo_opt(year, 1)?.and_hms_opt(0, 0, 0)?.and_utc();
    let micros = ((day - 1.0) * 86_400_000_000.0).round() as i64;
    Some(start + Duration::microseconds(micros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tle::{ISS_LINE1, ISS_LINE2, ISS_TLE};
    use chrono::{Datelike, Timelike};

    fn with_checksum(body: &str) -> String {
        assert_eq!(body.len(), 68);
        format!("{}{}", body, checksum(body))
    }

    #[test]
    fn parses_iss_elements() {
        let elements = OrbitalElementSet::parse(ISS_TLE).unwrap();

        assert_eq!(elements.catalog_number, 25544);
        assert_eq!(elements.inclination_deg, 51.6426);
        assert_eq!(elements.right_ascension_deg, 355.0105);
        assert!((elements.eccentricity - 0.0003727).abs() < 1e-12);
        assert_eq!(elements.argument_of_perigee_deg, 342.0009);
        assert_eq!(elements.mean_anomaly_deg, 113.8232);
        assert_eq!(elements.mean_motion_rev_per_day, 15.49590945);
        assert!((elements.drag_term - 0.25659e-3).abs() < 1e-12);

        assert_eq!(elements.epoch.year(), 2023);
        assert_eq!(elements.epoch.ordinal(), 235);
        assert_eq!(elements.epoch.hour(), 12);
        assert_eq!(elements.epoch.minute(), 18);
    }

    #[test]
    fn reserializes_raw_lines() {
        let elements = OrbitalElementSet::parse(ISS_TLE).unwrap();
        assert_eq!(elements.line1(), ISS_LINE1);
        assert_eq!(elements.line2(), ISS_LINE2);
        assert_eq!(elements.to_tle_string(), ISS_TLE);

        let other = "1 25544U 98067A   20148.21301450  .00001715  00000-0  38778-4 0  9992\n\
                     2 25544  51.6435  92.2789 0002570 358.0648 144.9972 15.49396855228767";
        let elements = OrbitalElementSet::parse(other).unwrap();
        assert_eq!(elements.to_tle_string(), other);
        assert_eq!(
            OrbitalElementSet::parse(&elements.to_tle_string()).unwrap(),
            elements
        );
    }

    #[test]
    fn three_line_form_keeps_name() {
        let text = format!("ISS (ZARYA)\r\n{ISS_LINE1}\r\n{ISS_LINE2}\r\n");
        let elements = OrbitalElementSet::parse(&text).unwrap();
        assert_eq!(elements.object_name.as_deref(), Some("ISS (ZARYA)"));
        assert_eq!(elements.to_tle_string(), ISS_TLE);
    }

    #[test]
    fn rejects_blank_and_short_input() {
        assert_eq!(OrbitalElementSet::parse(""), Err(TleError::Empty));
        assert_eq!(OrbitalElementSet::parse("   \n "), Err(TleError::Empty));
        assert_eq!(
            OrbitalElementSet::parse(ISS_LINE2),
            Err(TleError::MissingLines(1))
        );
    }

    #[test]
    fn rejects_non_numeric_field() {
        let body = &ISS_LINE2[..68].replacen(" 51.6426", " 51.6X26", 1);
        let line2 = with_checksum(body);
        let err = OrbitalElementSet::from_lines(None, ISS_LINE1, &line2).unwrap_err();
        assert!(matches!(err, TleError::Malformed { line: 2, .. }), "{err}");

        let body = &ISS_LINE2[..68].replacen("0003727", "00037a7", 1);
        let line2 = with_checksum(body);
        let err = OrbitalElementSet::from_lines(None, ISS_LINE1, &line2).unwrap_err();
        assert!(matches!(err, TleError::Malformed { line: 2, .. }), "{err}");
    }

    #[test]
    fn rejects_bad_checksum() {
        let line2 = format!("{}0", &ISS_LINE2[..68]);
        let err = OrbitalElementSet::from_lines(None, ISS_LINE1, &line2).unwrap_err();
        assert_eq!(
            err,
            TleError::Checksum {
                line: 2,
                expected: 0,
                computed: 5
            }
        );
    }

    #[test]
    fn rejects_swapped_or_truncated_lines() {
        assert!(OrbitalElementSet::from_lines(None, ISS_LINE2, ISS_LINE1).is_err());
        assert!(OrbitalElementSet::from_lines(None, &ISS_LINE1[..60], ISS_LINE2).is_err());
    }

    #[test]
    fn rejects_catalog_mismatch() {
        let body = ISS_LINE2[..68].replacen("25544", "25545", 1);
        let line2 = with_checksum(&body);
        assert_eq!(
            OrbitalElementSet::from_lines(None, ISS_LINE1, &line2),
            Err(TleError::CatalogMismatch(25544, 25545))
        );
    }

    #[test]
    fn implied_decimal_notation() {
        assert_eq!(parse_implied_decimal("00000-0"), Some(0.0));
        assert!((parse_implied_decimal("-11606-4").unwrap() + 0.11606e-4).abs() < 1e-15);
        assert!((parse_implied_decimal("+38778-4").unwrap() - 0.38778e-4).abs() < 1e-15);
        assert_eq!(parse_implied_decimal("abc-1"), None);
        assert_eq!(parse_implied_decimal(""), None);
    }

    #[test]
    fn epoch_century_rule() {
        let old = parse_epoch("98001.50000000").unwrap();
        assert_eq!(old.year(), 1998);
        assert_eq!(old.hour(), 12);
        assert_eq!(parse_epoch("56001.00000000").unwrap().year(), 2056);
        assert_eq!(parse_epoch("23000.00000000"), None);
    }
}
