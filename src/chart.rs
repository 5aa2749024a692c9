//! AQI comparison bar chart.
//!
//! [`layout`] decides bar order, labels and axis range; [`render_png`] draws
//! that layout to a PNG with plotters.

use anyhow::{Result, anyhow};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

use crate::records::SummaryRecord;

/// Default output file, relative to the working directory.
pub const DEFAULT_CHART_PATH: &str = "aqi_bar.png";

/// Pixel size of the rendered image (10 x 5.5 in at 180 dpi).
pub const CHART_SIZE: (u32, u32) = (1800, 990);

const TITLE: &str = "Current Air Quality Index (AQI)";
const MIN_Y_MAX: f64 = 350.0;
const Y_HEADROOM: f64 = 25.0;
const FOOTNOTE: &str =
    "Source: WAQI API (aqicn.org). Categories follow common US AQI ranges (AirNow).";

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub city: String,
    pub aqi: Option<f64>,
    pub label: String,
}

/// Everything needed to draw the chart, independent of the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    /// Second caption line: the cities being compared, in input order.
    pub subtitle: String,
    pub bars: Vec<Bar>,
    pub y_max: f64,
}

/// Sorts cities by AQI, worst first, with missing readings at the end.
///
/// Ties and missing values keep their input order.
pub fn layout(records: &[SummaryRecord]) -> ChartLayout {
    let mut sorted: Vec<&SummaryRecord> = records.iter().collect();
    sorted.sort_by(|a, b| match (a.aqi, b.aqi) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let bars: Vec<Bar> = sorted
        .into_iter()
        .map(|r| Bar {
            city: r.city.clone(),
            aqi: r.aqi,
            label: match r.aqi {
                Some(v) => format!("{} ({})", v.round() as i64, r.category),
                None => "n/a".to_string(),
            },
        })
        .collect();

    let highest = bars.iter().filter_map(|b| b.aqi).fold(f64::NAN, f64::max);
    let y_max = if highest.is_nan() {
        MIN_Y_MAX
    } else {
        MIN_Y_MAX.max(highest + Y_HEADROOM)
    };

    let cities: Vec<&str> = records.iter().map(|r| r.city.as_str()).collect();
    ChartLayout {
        title: TITLE.to_string(),
        subtitle: cities.join(" vs "),
        bars,
        y_max,
    }
}

/// Draws the chart for `records` into a PNG at `path`, replacing any
/// existing file.
pub fn render_png(records: &[SummaryRecord], path: &Path) -> Result<()> {
    let chart = layout(records);
    debug!(path = %path.display(), bars = chart.bars.len(), y_max = chart.y_max, "Rendering chart");
    draw(&chart, path).map_err(|e| anyhow!("failed to render {}: {e}", path.display()))
}

fn draw(chart: &ChartLayout, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (_, height) = CHART_SIZE;
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (plot_area, footer) = root.split_vertically(height - 50);
    let plot_area = plot_area
        .titled(&chart.title, ("sans-serif", 40))?
        .titled(&chart.subtitle, ("sans-serif", 30))?;

    // At least one segment so an empty report still yields a valid image.
    let n = chart.bars.len().max(1) as u32;
    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..chart.y_max)?;

    let names: Vec<&str> = chart.bars.iter().map(|b| b.city.as_str()).collect();
    ctx.configure_mesh()
        .disable_x_mesh()
        .y_desc("AQI (higher = worse)")
        .axis_desc_style(("sans-serif", 24))
        .label_style(("sans-serif", 22))
        .x_labels(names.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => names.get(*i as usize).copied().unwrap_or("").to_string(),
            _ => String::new(),
        })
        .draw()?;

    ctx.draw_series(chart.bars.iter().enumerate().filter_map(|(i, bar)| {
        let i = i as u32;
        let v = bar.aqi?;
        let mut rect = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
            BLUE.mix(0.7).filled(),
        );
        rect.set_margin(0, 0, 30, 30);
        Some(rect)
    }))?;

    let label_style = TextStyle::from(("sans-serif", 22).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    ctx.draw_series(chart.bars.iter().enumerate().map(|(i, bar)| {
        let y = bar.aqi.map_or(5.0, |v| v + 5.0);
        Text::new(
            bar.label.clone(),
            (SegmentValue::CenterOf(i as u32), y),
            label_style.clone(),
        )
    }))?;

    footer.draw_text(
        FOOTNOTE,
        &TextStyle::from(("sans-serif", 18).into_font()).color(&BLACK),
        (20, 10),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn rec(city: &str, aqi: Option<f64>) -> SummaryRecord {
        SummaryRecord {
            city: city.to_string(),
            aqi,
            category: Category::for_reading(aqi),
            observed_time: None,
            station: None,
            reported_city: None,
            lat: None,
            lon: None,
            error: None,
        }
    }

    #[test]
    fn test_sorted_descending_missing_last() {
        let records = vec![rec("A", Some(40.0)), rec("B", None), rec("C", Some(120.0))];
        let chart = layout(&records);

        let order: Vec<_> = chart.bars.iter().map(|b| b.city.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(chart.bars[0].label, "120 (Unhealthy (Sensitive))");
        assert_eq!(chart.bars[1].label, "40 (Good)");
        assert_eq!(chart.bars[2].label, "n/a");
    }

    #[test]
    fn test_missing_values_keep_input_order() {
        let records = vec![rec("X", None), rec("Y", Some(10.0)), rec("Z", None)];
        let chart = layout(&records);
        let order: Vec<_> = chart.bars.iter().map(|b| b.city.as_str()).collect();
        assert_eq!(order, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_label_rounds_aqi() {
        let chart = layout(&[rec("A", Some(57.6))]);
        assert_eq!(chart.bars[0].label, "58 (Moderate)");
    }

    #[test]
    fn test_y_max_has_floor_and_headroom() {
        assert_eq!(layout(&[rec("A", Some(40.0))]).y_max, 350.0);
        assert_eq!(layout(&[rec("A", Some(400.0))]).y_max, 425.0);
        assert_eq!(layout(&[rec("A", None)]).y_max, 350.0);
        assert_eq!(layout(&[]).y_max, 350.0);
    }

    #[test]
    fn test_subtitle_lists_cities_in_input_order() {
        let chart = layout(&[rec("São Paulo", None), rec("Montreal", Some(20.0))]);
        assert_eq!(chart.title, "Current Air Quality Index (AQI)");
        assert_eq!(chart.subtitle, "São Paulo vs Montreal");
    }

    #[test]
    fn test_render_png_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CHART_PATH);
        let records = vec![rec("A", Some(40.0)), rec("B", None), rec("C", Some(120.0))];

        render_png(&records, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        assert!(first.starts_with(b"\x89PNG\r\n\x1a\n"));

        render_png(&records[..1], &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert!(second.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
