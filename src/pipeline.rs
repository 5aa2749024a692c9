//! Sequential fetch → parse loop over the configured cities.

use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::error::CityError;
use crate::parser::parse_city;
use crate::records::{CityQuery, PollutantRecord, SummaryRecord};
use crate::services::feed_api::FeedApi;

/// Records collected for a run, one of each per city, in city order.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub summaries: Vec<SummaryRecord>,
    pub pollutants: Vec<PollutantRecord>,
}

impl Report {
    pub fn failed_count(&self) -> usize {
        self.summaries.iter().filter(|s| s.is_failed()).count()
    }
}

/// Fetches and parses each city in turn.
///
/// A failed city still contributes a degraded summary and an empty pollutant
/// record; the loop always moves on to the next city. `pacing` is slept after
/// every attempt to keep request rate low.
pub fn collect<A: FeedApi>(api: &A, cities: &[CityQuery], pacing: Duration) -> Report {
    let mut report = Report {
        summaries: Vec::with_capacity(cities.len()),
        pollutants: Vec::with_capacity(cities.len()),
    };

    for city in cities {
        let (summary, pollutants) = fetch_city(api, city);
        report.summaries.push(summary);
        report.pollutants.push(pollutants);

        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }
    }

    info!(
        cities = cities.len(),
        failed = report.failed_count(),
        "Collection finished"
    );
    report
}

#[tracing::instrument(skip(api, city), fields(city = city.label, feed = city.feed_path))]
fn fetch_city<A: FeedApi>(api: &A, city: &CityQuery) -> (SummaryRecord, PollutantRecord) {
    match api.fetch_feed(city.feed_path) {
        Ok(data) => {
            let (summary, pollutants) = parse_city(city.label, &data);
            if summary.aqi.is_none() {
                warn!("Feed has no usable AQI value");
            } else {
                info!(aqi = summary.aqi, category = %summary.category, "City fetched");
            }
            (summary, pollutants)
        }
        Err(e) => {
            error!(error = %e, kind = e.kind().as_str(), "City fetch failed");
            (
                SummaryRecord::failed(city.label, CityError::from(&e)),
                PollutantRecord::empty(city.label),
            )
        }
    }
}
