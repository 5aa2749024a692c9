use serde::Serialize;

use crate::category::Category;
use crate::error::CityError;

/// A city to report on: the label shown to users and the WAQI feed path
/// (the part after `/feed/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    pub label: &'static str,
    pub feed_path: &'static str,
}

impl CityQuery {
    pub const fn new(label: &'static str, feed_path: &'static str) -> Self {
        Self { label, feed_path }
    }
}

/// Cities covered by every report, in display order.
pub const CITIES: [CityQuery; 3] = [
    CityQuery::new("São Paulo", "sao%20paulo"),
    CityQuery::new("Montreal", "montreal"),
    CityQuery::new("Seattle", "seattle"),
];

/// Headline reading for one city.
///
/// `category` is `Unknown` exactly when `aqi` is `None`. `lat` and `lon` are
/// either both set or both `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub city: String,
    pub aqi: Option<f64>,
    pub category: Category,
    pub observed_time: Option<String>,
    pub station: Option<String>,
    pub reported_city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub error: Option<CityError>,
}

impl SummaryRecord {
    /// Record for a city whose fetch failed: everything missing except the
    /// label and the error.
    pub fn failed(city: &str, error: CityError) -> Self {
        SummaryRecord {
            city: city.to_string(),
            aqi: None,
            category: Category::Unknown,
            observed_time: None,
            station: None,
            reported_city: None,
            lat: None,
            lon: None,
            error: Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Individual pollutant sub-indices (WAQI "iaqi") for one city.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PollutantRecord {
    pub city: String,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,
    pub co: Option<f64>,
}

impl PollutantRecord {
    /// Sub-index keys in column order.
    pub const KEYS: [&'static str; 6] = ["pm25", "pm10", "o3", "no2", "so2", "co"];

    /// Record with only the city set.
    pub fn empty(city: &str) -> Self {
        PollutantRecord {
            city: city.to_string(),
            ..Default::default()
        }
    }

    /// Values in [`Self::KEYS`] order.
    pub fn values(&self) -> [Option<f64>; 6] {
        [self.pm25, self.pm10, self.o3, self.no2, self.so2, self.co]
    }
}
