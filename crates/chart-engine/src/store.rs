// File: crates/chart-engine/src/store.rs
// Summary: Immutable raw series storage with version tagging and ingestion
// of loosely-keyed records through the configured field mapping.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::FieldNames;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// One raw sample as loaded from the dataset. Numeric fields default to 0
/// when the source record does not carry them; `battery_energy` and `price`
/// stay `None` so consumers can tell "absent" from "zero".
#[derive(Clone, Debug, PartialEq)]
pub struct RawPoint {
    /// The time/label field (`Den` by default). Kept as delivered; display
    /// formatting happens at derivation time.
    pub label: String,
    pub consumption: f64,
    pub production: f64,
    pub battery: f64,
    pub battery_energy: Option<f64>,
    pub price: Option<f64>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record {row} is missing the time field '{field}'")]
    MissingTimeField { row: usize, field: String },
}

/// Owns the raw ordered series for one chart instance. Immutable for its
/// lifetime; a new dataset replaces the store wholesale. The version tag is
/// process-unique and keys downstream memoization.
#[derive(Clone, Debug)]
pub struct SeriesStore {
    points: Vec<RawPoint>,
    version: u64,
}

impl SeriesStore {
    pub fn new(points: Vec<RawPoint>) -> Self {
        Self {
            points,
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Ingest ordered records keyed by dataset column names. The time field
    /// is required per record; numeric fields are optional and non-numeric
    /// values count as absent.
    pub fn from_records(
        records: &[Map<String, Value>],
        fields: &FieldNames,
    ) -> Result<Self, StoreError> {
        let mut points = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let label = match record.get(&fields.time) {
                Some(Value::String(s)) => s.clone(),
                Some(v) if !v.is_null() => v.to_string(),
                _ => {
                    return Err(StoreError::MissingTimeField {
                        row,
                        field: fields.time.clone(),
                    })
                }
            };
            points.push(RawPoint {
                label,
                consumption: number_or_zero(record, &fields.consumption),
                production: number_or_zero(record, &fields.production),
                battery: number_or_zero(record, &fields.battery),
                battery_energy: fields
                    .battery_energy
                    .as_deref()
                    .and_then(|name| number(record, name)),
                price: fields.price.as_deref().and_then(|name| number(record, name)),
            });
        }
        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[RawPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

fn number(record: &Map<String, Value>, name: &str) -> Option<f64> {
    record.get(name).and_then(Value::as_f64)
}

fn number_or_zero(record: &Map<String, Value>, name: &str) -> f64 {
    number(record, name).unwrap_or(0.0)
}
