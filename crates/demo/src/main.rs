// File: crates/demo/src/main.rs
// Summary: Demo loads an hourly energy CSV (or synthesizes a year of data),
// zooms, brushes and toggles series headlessly, then writes a CSV export.

use anyhow::{Context, Result};
use chart_engine::{ChartConfig, ChartEngine, ChartEvent, SeriesStore};
use chrono::NaiveDate;
use serde_json::{Map, Number, Value};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let records = match std::env::args().nth(1) {
        Some(path) => {
            println!("Using input file: {path}");
            load_records_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?
        }
        None => {
            println!("No input file given; synthesizing one year of hourly data");
            synthesize_year()
        }
    };

    let config = ChartConfig::default();
    let store = SeriesStore::from_records(&records, &config.field_names)?;
    println!("Loaded {} points", store.len());

    let mut engine = ChartEngine::new(store, config);
    let (displayed, windowed) = engine.display_counts();
    println!("Initial frame: {displayed} of {windowed} points");

    // Wheel in a few times, as a user would.
    for _ in 0..3 {
        engine.apply(ChartEvent::Wheel { delta_y: -120.0 });
    }
    let vp = engine.viewport();
    println!("After wheel zoom: viewport [{}, {}]", vp.left, vp.right);

    // Brush-select the middle third of the displayed points.
    let count = engine.visible_points().len();
    if count > 3 {
        engine.apply(ChartEvent::PointerDown { index: count / 3 });
        engine.apply(ChartEvent::PointerMove { index: 2 * count / 3 });
        engine.apply(ChartEvent::PointerUp);
        let vp = engine.viewport();
        println!("After brush select: viewport [{}, {}]", vp.left, vp.right);
    }

    // Hide the price line before exporting.
    engine.apply(ChartEvent::ToggleSeries { key: "price".to_string() });

    let export = engine.export("Roční přehled");
    let out = PathBuf::from("target/out").join(&export.filename);
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, &export.content)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!(
        "Wrote {} ({} rows)",
        out.display(),
        export.content.lines().count().saturating_sub(1)
    );

    engine.apply(ChartEvent::Reset);
    let vp = engine.viewport();
    println!("After reset: viewport [{}, {}]", vp.left, vp.right);

    Ok(())
}

/// Read a headered CSV into loosely-keyed records; numeric cells become JSON
/// numbers so the store's field mapping can pick them up.
fn load_records_csv(path: &Path) -> Result<Vec<Map<String, Value>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut record = Map::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            let value = match cell.trim().parse::<f64>() {
                Ok(n) => Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null),
                Err(_) => Value::String(cell.to_string()),
            };
            record.insert(name.to_string(), value);
        }
        records.push(record);
    }
    Ok(records)
}

/// One year of plausible hourly PV/consumption/battery/price samples.
fn synthesize_year() -> Vec<Map<String, Value>> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("static date");

    (0..365 * 24)
        .map(|h| {
            let ts = start + chrono::Duration::hours(h);
            let hour = h % 24;
            let day = h / 24;
            let daylight = ((hour as f64 - 12.0) / 6.0).powi(2);
            let production = if (6..=18).contains(&hour) {
                (4.0 * (1.0 - daylight)).max(0.0) * (1.0 + (day as f64 * 0.017).sin() * 0.5)
            } else {
                0.0
            };
            let consumption = 0.8 + ((hour as f64 - 19.0) / 3.0).powi(2).recip().min(2.0);
            let battery = (production - consumption).clamp(-3.0, 3.0);

            let mut record = Map::new();
            record.insert(
                "Den".to_string(),
                Value::String(ts.format("%Y-%m-%dT%H:%M:%S").to_string()),
            );
            insert_number(&mut record, "kWh", consumption);
            insert_number(&mut record, "PVkWh", production);
            insert_number(&mut record, "BkWh", battery);
            insert_number(&mut record, "BkWh_charge", 5.0 + battery);
            insert_number(&mut record, "Kč/kWh", 2.5 + (hour as f64 * 0.26).sin());
            record
        })
        .collect()
}

fn insert_number(record: &mut Map<String, Value>, key: &str, value: f64) {
    if let Some(n) = Number::from_f64(value) {
        record.insert(key.to_string(), Value::Number(n));
    }
}
