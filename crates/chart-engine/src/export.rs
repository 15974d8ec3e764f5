// File: crates/chart-engine/src/export.rs
// Summary: CSV serialization of the visible, decimated series selection.
// Header labels and the filename slug match the dashboard's export format.

use crate::config::{BatteryMode, ChartConfig};
use crate::derive::DerivedPoint;
use crate::types::SeriesKey;
use crate::visibility::VisibilitySet;

/// A ready-to-deliver export: suggested filename plus the `\n`-joined,
/// comma-separated UTF-8 content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Serialize `points` (already viewport-sliced and decimated) to CSV.
/// Columns appear in fixed order — date, consumption, production, battery,
/// sum, price — restricted to visible series; the price column additionally
/// requires a configured price field. Missing values render as empty
/// strings, never `0`.
pub fn export_csv(
    points: &[DerivedPoint],
    visibility: &VisibilitySet,
    config: &ChartConfig,
    title: &str,
) -> CsvExport {
    let mut headers = vec!["Datum".to_string()];
    let mut columns: Vec<SeriesKey> = Vec::new();

    if visibility.is_visible(SeriesKey::Consumption.as_str()) {
        headers.push("Spotřeba (kWh)".to_string());
        columns.push(SeriesKey::Consumption);
    }
    if visibility.is_visible(SeriesKey::Production.as_str()) {
        headers.push(if config.invert_production {
            "Výroba (kWh) [invertováno]".to_string()
        } else {
            "Výroba (kWh)".to_string()
        });
        columns.push(SeriesKey::Production);
    }
    if visibility.is_visible(SeriesKey::Battery.as_str()) {
        headers.push(match config.battery_mode {
            BatteryMode::Energy => "Energie v baterii (kWh)".to_string(),
            BatteryMode::Flow => "Baterie (kWh)".to_string(),
        });
        columns.push(SeriesKey::Battery);
    }
    if visibility.is_visible(SeriesKey::Sum.as_str()) {
        headers.push(format!("Suma ({})", config.sum_mode.label()));
        columns.push(SeriesKey::Sum);
    }
    if visibility.is_visible(SeriesKey::Price.as_str()) && config.field_names.price.is_some() {
        headers.push("Cena (Kč/kWh)".to_string());
        columns.push(SeriesKey::Price);
    }

    let mut lines = Vec::with_capacity(points.len() + 1);
    lines.push(headers.join(","));
    for point in points {
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(point.formatted_date.clone());
        for key in &columns {
            row.push(cell(point, *key));
        }
        lines.push(row.join(","));
    }

    CsvExport {
        filename: format!("{}_export.csv", slugify(title)),
        content: lines.join("\n"),
    }
}

fn cell(point: &DerivedPoint, key: SeriesKey) -> String {
    match key {
        SeriesKey::Consumption => format_value(point.consumption),
        SeriesKey::Production => format_value(point.processed_production),
        SeriesKey::Battery => format_value(point.processed_battery),
        SeriesKey::Sum => format_value(point.processed_sum),
        SeriesKey::Price => point.price.map(format_value).unwrap_or_default(),
    }
}

fn format_value(v: f64) -> String {
    format!("{v}")
}

/// Whitespace runs become a single underscore.
fn slugify(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}
