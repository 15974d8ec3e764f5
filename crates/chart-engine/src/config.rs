// File: crates/chart-engine/src/config.rs
// Summary: Chart configuration (sum/battery modes, inversion, field mapping).
// Mode values can originate from persisted user preferences, so unknown
// strings deserialize to the documented defaults instead of failing.

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_MAX_POINTS;

/// Which raw series the derived "sum" line combines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum SumMode {
    #[default]
    All,
    ConsAndProd,
    ConsAndBatt,
    ProdAndBatt,
}

impl SumMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SumMode::All => "all",
            SumMode::ConsAndProd => "consAndProd",
            SumMode::ConsAndBatt => "consAndBatt",
            SumMode::ProdAndBatt => "prodAndBatt",
        }
    }

    /// Czech label used in the exported "Suma (...)" header and mode radio UI.
    pub const fn label(&self) -> &'static str {
        match self {
            SumMode::All => "Všechno",
            SumMode::ConsAndProd => "Spotřeba a výroba",
            SumMode::ConsAndBatt => "Spotřeba a baterie",
            SumMode::ProdAndBatt => "Výroba a baterie",
        }
    }
}

impl From<String> for SumMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "consAndProd" => SumMode::ConsAndProd,
            "consAndBatt" => SumMode::ConsAndBatt,
            "prodAndBatt" => SumMode::ProdAndBatt,
            // "all" and anything unrecognized
            _ => SumMode::All,
        }
    }
}

/// Battery display mode: instantaneous charge/discharge flow, or the
/// cumulative energy stored in the battery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum BatteryMode {
    #[default]
    Flow,
    Energy,
}

impl BatteryMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BatteryMode::Flow => "flow",
            BatteryMode::Energy => "energy",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            BatteryMode::Flow => "Odběr / Dodávka",
            BatteryMode::Energy => "Energie v baterii",
        }
    }
}

impl From<String> for BatteryMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "energy" => BatteryMode::Energy,
            _ => BatteryMode::Flow,
        }
    }
}

/// Maps the engine's series roles onto the column names of the loaded
/// dataset. `battery_energy` and `price` are optional: when absent, the
/// battery-energy display falls back to flow values and the price series
/// (and its export column) does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNames {
    #[serde(default = "FieldNames::default_time")]
    pub time: String,
    #[serde(default = "FieldNames::default_consumption")]
    pub consumption: String,
    #[serde(default = "FieldNames::default_production")]
    pub production: String,
    #[serde(default = "FieldNames::default_battery")]
    pub battery: String,
    #[serde(default = "FieldNames::default_battery_energy")]
    pub battery_energy: Option<String>,
    #[serde(default = "FieldNames::default_price")]
    pub price: Option<String>,
}

impl FieldNames {
    fn default_time() -> String {
        "Den".to_string()
    }
    fn default_consumption() -> String {
        "kWh".to_string()
    }
    fn default_production() -> String {
        "PVkWh".to_string()
    }
    fn default_battery() -> String {
        "BkWh".to_string()
    }
    fn default_battery_energy() -> Option<String> {
        Some("BkWh_charge".to_string())
    }
    fn default_price() -> Option<String> {
        Some("Kč/kWh".to_string())
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            time: Self::default_time(),
            consumption: Self::default_consumption(),
            production: Self::default_production(),
            battery: Self::default_battery(),
            battery_energy: Self::default_battery_energy(),
            price: Self::default_price(),
        }
    }
}

/// Full configuration for one chart instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub invert_production: bool,
    pub sum_mode: SumMode,
    pub battery_mode: BatteryMode,
    pub max_data_points: usize,
    pub field_names: FieldNames,
}

impl ChartConfig {
    /// Decimation threshold, clamped to the smallest value for which LTTB
    /// is meaningful (first + last + one interior point).
    pub fn decimation_threshold(&self) -> usize {
        self.max_data_points.max(3)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            invert_production: false,
            sum_mode: SumMode::default(),
            battery_mode: BatteryMode::default(),
            max_data_points: DEFAULT_MAX_POINTS,
            field_names: FieldNames::default(),
        }
    }
}
