// File: crates/chart-engine/src/lib.rs
// Summary: Core library entry point; exports public API for the interactive
// energy time-series engine (derivation, decimation, viewport, export).

pub mod config;
pub mod derive;
pub mod downsample;
pub mod engine;
pub mod export;
pub mod store;
pub mod types;
pub mod view;
pub mod visibility;

pub use config::{BatteryMode, ChartConfig, FieldNames, SumMode};
pub use derive::{compute_derived, DerivedPoint};
pub use downsample::lttb_by;
pub use engine::{ChartEngine, ChartEvent};
pub use export::{export_csv, CsvExport};
pub use store::{RawPoint, SeriesStore, StoreError};
pub use types::SeriesKey;
pub use view::{Viewport, ViewportController, ViewPhase};
pub use visibility::VisibilitySet;
