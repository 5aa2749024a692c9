//! Console tables and JSON debug output for collected records.

use anyhow::Result;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{CellAlignment, Table};
use tracing::debug;

use crate::pipeline::Report;
use crate::records::{PollutantRecord, SummaryRecord};

const SUMMARY_HEADER: [&str; 5] = ["City", "AQI", "Category", "ObservedTime", "Station/Area"];

fn opt_text(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

fn opt_num(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table
}

/// Headline table: one row per city, missing AQI shown as `n/a`.
pub fn summary_table(records: &[SummaryRecord]) -> Table {
    let mut table = base_table();
    table.set_header(SUMMARY_HEADER);

    for r in records {
        table.add_row(vec![
            r.city.clone(),
            r.aqi.map_or_else(|| "n/a".to_string(), |v| v.to_string()),
            r.category.to_string(),
            opt_text(&r.observed_time),
            opt_text(&r.station),
        ]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Pollutant sub-index table; missing values are left blank.
pub fn pollutant_table(records: &[PollutantRecord]) -> Table {
    let mut table = base_table();
    let mut header = vec!["City"];
    header.extend(PollutantRecord::KEYS);
    table.set_header(header);

    for r in records {
        let mut row = vec![r.city.clone()];
        row.extend(r.values().into_iter().map(opt_num));
        table.add_row(row);
    }

    for i in 1..=PollutantRecord::KEYS.len() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Prints both tables to stdout.
pub fn print_report(report: &Report) {
    println!("\n=== Current AQI Summary ===");
    println!("{}", summary_table(&report.summaries));
    println!("\n=== Pollutants (IAQI components, if available) ===");
    println!("{}", pollutant_table(&report.pollutants));
}

/// Logs the whole report as pretty-printed JSON.
pub fn log_json(report: &Report) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
