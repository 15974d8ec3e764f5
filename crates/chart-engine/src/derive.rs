// File: crates/chart-engine/src/derive.rs
// Summary: Derived-field computation: production inversion, sum modes,
// battery display mode, and display-date formatting. Pure and total.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::config::{BatteryMode, ChartConfig, SumMode};
use crate::store::{RawPoint, SeriesStore};

/// A raw sample plus every derived value a renderer, tooltip or exporter
/// needs. `original_index` maps the point back to raw-series coordinates
/// after viewport slicing and decimation.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedPoint {
    pub original_index: usize,
    pub label: String,
    /// `d.m.yyyy HH:MM` rendering of the label, or the label itself when it
    /// does not parse as a date. Display/export only, never computation.
    pub formatted_date: String,
    pub consumption: f64,
    pub production: f64,
    pub battery: f64,
    pub battery_energy: Option<f64>,
    pub price: Option<f64>,
    pub processed_production: f64,
    pub processed_sum: f64,
    pub processed_battery: f64,
}

impl DerivedPoint {
    /// Primary metric driving shape-preserving decimation.
    pub fn metric(&self) -> f64 {
        self.consumption
    }
}

/// Map every raw point to its derived form. Never fails: absent fields are
/// already zero-defaulted in the store, and unparseable labels pass through.
/// Recompute whenever the store version or the config changes; cacheable by
/// `(version, config)` otherwise.
pub fn compute_derived(store: &SeriesStore, config: &ChartConfig) -> Vec<DerivedPoint> {
    store
        .points()
        .iter()
        .enumerate()
        .map(|(index, raw)| derive_point(index, raw, config))
        .collect()
}

fn derive_point(index: usize, raw: &RawPoint, config: &ChartConfig) -> DerivedPoint {
    let processed_production = if config.invert_production {
        -raw.production
    } else {
        raw.production
    };

    let processed_sum = match config.sum_mode {
        SumMode::All => raw.battery + raw.consumption + raw.production,
        SumMode::ConsAndProd => raw.consumption + raw.production,
        SumMode::ConsAndBatt => raw.battery + raw.consumption,
        SumMode::ProdAndBatt => raw.battery + raw.production,
    };

    let processed_battery = match config.battery_mode {
        BatteryMode::Energy => raw.battery_energy.unwrap_or(raw.battery),
        BatteryMode::Flow => raw.battery,
    };

    DerivedPoint {
        original_index: index,
        label: raw.label.clone(),
        formatted_date: format_display_date(&raw.label),
        consumption: raw.consumption,
        production: raw.production,
        battery: raw.battery,
        battery_energy: raw.battery_energy,
        price: raw.price,
        processed_production,
        processed_sum,
        processed_battery,
    }
}

/// Czech display format `5.11.2025 14:30` (day/month unpadded). Falls back
/// to the raw label when no supported timestamp format matches.
pub fn format_display_date(label: &str) -> String {
    match parse_label(label) {
        Some(dt) => format!(
            "{}.{}.{} {:02}:{:02}",
            dt.day(),
            dt.month(),
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => label.to_string(),
    }
}

fn parse_label(label: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(label, fmt) {
            return Some(dt);
        }
    }
    // Date-only labels render as midnight.
    NaiveDate::parse_from_str(label, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
