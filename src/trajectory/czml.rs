use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::propagation::PropagationError;
use crate::trajectory::TrajectorySample;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const INTERPOLATION_ALGORITHM: &str = "LAGRANGE";
const INTERPOLATION_DEGREE: u32 = 5;
const YELLOW: [u8; 4] = [255, 255, 0, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

pub fn write_document<I>(
    satid: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    samples: I,
) -> Result<Value, PropagationError>
where
    I: IntoIterator<Item = Result<TrajectorySample, PropagationError>>,
{
    let mut cartesian = Vec::new();
    for sample in samples {
        let sample = sample?;
        cartesian.extend([sample.offset_s, sample.x, sample.y, sample.z]);
    }

    let start = start.format(TIMESTAMP_FORMAT).to_string();
    let end = end.format(TIMESTAMP_FORMAT).to_string();

    Ok(json!([
        {
            "id": "document",
            "version": "1.0"
        },
        {
            "id": format!("Satellite {}", satid),
            "availability": format!("{}/{}", start, end),
            "position": {
                "interpolationAlgorithm": INTERPOLATION_ALGORITHM,
                "interpolationDegree": INTERPOLATION_DEGREE,
                "epoch": start,
                "cartesian": cartesian
            },
            "label": {
                "text": format!("Sat {}", satid),
                "font": "14px Helvetica",
                "fillColor": { "rgba": YELLOW },
                "outlineColor": { "rgba": BLACK },
                "outlineWidth": 2,
                "style": "FILL",
                "horizontalOrigin": "LEFT",
                "verticalOrigin": "BOTTOM",
                "pixelOffset": { "cartesian2": [10, -10] }
            },
            "path": { "show": [{ "boolean": true }] },
            "point": {
                "pixelSize": 10,
                "color": { "rgba": YELLOW }
            },
            "description": format!("Satellite {}", satid)
        }
    ]))
}
