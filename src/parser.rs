//! Parser for WAQI city feed responses.

use serde::Deserialize;
use serde_json::Value;

use crate::category::Category;
use crate::error::FetchError;
use crate::lookup::Seg::{Index, Key};
use crate::lookup::{as_number, lookup, number_at, string_at};
use crate::records::{PollutantRecord, SummaryRecord};

/// Top-level `{"status": ..., "data": ...}` wrapper of every WAQI response.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Value,
}

/// Decodes a WAQI response body and returns its `data` object.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] for malformed JSON and
/// [`FetchError::ApiStatus`] when `status` is anything other than `"ok"`.
pub fn parse_payload(body: &str) -> Result<Value, FetchError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    match envelope.status.as_deref() {
        Some("ok") => Ok(envelope.data),
        other => Err(FetchError::ApiStatus {
            status: other.unwrap_or("None").to_string(),
            data: envelope.data.to_string(),
        }),
    }
}

/// Turns one city's `data` object into its summary and pollutant records.
///
/// Never fails: any field that is absent or malformed is left as `None`.
pub fn parse_city(label: &str, data: &Value) -> (SummaryRecord, PollutantRecord) {
    let aqi = number_at(data, &[Key("aqi")]);
    let reported_city = string_at(data, &[Key("city"), Key("name")]);

    let station = string_at(data, &[Key("attributions"), Index(0), Key("name")])
        .filter(|s| !s.is_empty())
        .or_else(|| reported_city.clone());

    let (lat, lon) = coordinates(data).unzip();

    let summary = SummaryRecord {
        city: label.to_string(),
        aqi,
        category: Category::for_reading(aqi),
        observed_time: string_at(data, &[Key("time"), Key("s")]),
        station,
        reported_city,
        lat,
        lon,
        error: None,
    };

    let iaqi = |key: &str| number_at(data, &[Key("iaqi"), Key(key), Key("v")]);
    let pollutants = PollutantRecord {
        city: label.to_string(),
        pm25: iaqi("pm25"),
        pm10: iaqi("pm10"),
        o3: iaqi("o3"),
        no2: iaqi("no2"),
        so2: iaqi("so2"),
        co: iaqi("co"),
    };

    (summary, pollutants)
}

/// `city.geo` as `(lat, lon)`, only when both halves are usable.
fn coordinates(data: &Value) -> Option<(f64, f64)> {
    let geo = lookup(data, &[Key("city"), Key("geo")])?.as_array()?;
    match geo.as_slice() {
        [lat, lon, ..] => Some((as_number(lat)?, as_number(lon)?)),
        _ => None,
    }
}
