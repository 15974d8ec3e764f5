// File: crates/chart-engine/src/visibility.rs
// Summary: Per-series visibility toggles. Every key defaults to visible;
// unknown keys are permitted and behave like known ones.

use std::collections::HashMap;

/// Boolean toggle state per series key. Only deviations from the default
/// (visible) are stored, so a fresh set reports `true` for everything.
#[derive(Clone, Debug, Default)]
pub struct VisibilitySet {
    state: HashMap<String, bool>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the toggle for `key`. An unseen key reads as visible, so its
    /// first toggle hides it.
    pub fn toggle(&mut self, key: &str) {
        let entry = self.state.entry(key.to_string()).or_insert(true);
        *entry = !*entry;
    }

    pub fn set_visible(&mut self, key: &str, visible: bool) {
        self.state.insert(key.to_string(), visible);
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.state.get(key).copied().unwrap_or(true)
    }
}
