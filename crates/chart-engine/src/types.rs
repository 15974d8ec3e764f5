// File: crates/chart-engine/src/types.rs
// Summary: Shared types and constants (series keys, decimation/zoom limits).

/// Default decimation threshold: at most this many points are handed to a
/// renderer or exporter per frame.
pub const DEFAULT_MAX_POINTS: usize = 2000;

/// Smallest index range a wheel zoom may produce.
pub const MIN_VISIBLE_RANGE: usize = 10;

/// The five series a chart instance knows how to display and export.
/// Column order in exports follows the declaration order here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Consumption,
    Production,
    Battery,
    Sum,
    Price,
}

impl SeriesKey {
    pub const ALL: [SeriesKey; 5] = [
        SeriesKey::Consumption,
        SeriesKey::Production,
        SeriesKey::Battery,
        SeriesKey::Sum,
        SeriesKey::Price,
    ];

    /// Wire name used by visibility toggles and persisted preferences.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SeriesKey::Consumption => "consumption",
            SeriesKey::Production => "production",
            SeriesKey::Battery => "battery",
            SeriesKey::Sum => "sum",
            SeriesKey::Price => "price",
        }
    }

    /// Czech display label, as shown in chart legends.
    pub const fn label(&self) -> &'static str {
        match self {
            SeriesKey::Consumption => "Spotřeba",
            SeriesKey::Production => "Výroba",
            SeriesKey::Battery => "Baterie",
            SeriesKey::Sum => "Suma",
            SeriesKey::Price => "Cena",
        }
    }
}
