// File: crates/chart-engine/src/engine.rs
// Summary: Chart engine glue: owns store/config/viewport/visibility, applies
// input events, and serves memoized derived + decimated frames.

use crate::config::ChartConfig;
use crate::derive::{compute_derived, DerivedPoint};
use crate::downsample::lttb_by;
use crate::export::{export_csv, CsvExport};
use crate::store::SeriesStore;
use crate::view::{ViewPhase, Viewport, ViewportController};
use crate::visibility::VisibilitySet;

/// Discrete input events the engine consumes. Pointer indices address the
/// currently displayed (decimated) points; the engine maps them back to
/// raw-series coordinates before touching the viewport.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    PointerDown { index: usize },
    PointerMove { index: usize },
    PointerUp,
    /// Pointer left the interactive surface; cancels an in-progress drag.
    PointerLeave,
    Wheel { delta_y: f64 },
    Reset,
    ToggleSeries { key: String },
}

struct DerivedCache {
    version: u64,
    config: ChartConfig,
    points: Vec<DerivedPoint>,
}

struct FrameCache {
    version: u64,
    config: ChartConfig,
    viewport: Viewport,
    points: Vec<DerivedPoint>,
}

/// One chart instance: immutable series store plus the mutable interaction
/// state, with frame recomputation keyed by `(version, config, viewport)`.
pub struct ChartEngine {
    store: SeriesStore,
    config: ChartConfig,
    view: ViewportController,
    visibility: VisibilitySet,
    derived: Option<DerivedCache>,
    frame: Option<FrameCache>,
}

impl ChartEngine {
    pub fn new(store: SeriesStore, config: ChartConfig) -> Self {
        let len = store.len();
        Self {
            store,
            config,
            view: ViewportController::new(len),
            visibility: VisibilitySet::new(),
            derived: None,
            frame: None,
        }
    }

    /// Swap in a new dataset. Viewport and visibility return to their
    /// defaults (full range, everything visible).
    pub fn replace_data(&mut self, store: SeriesStore) {
        self.view = ViewportController::new(store.len());
        self.visibility = VisibilitySet::new();
        self.store = store;
        self.derived = None;
        self.frame = None;
    }

    /// Reconfigure derivation/decimation. Zoom and visibility are kept;
    /// cached frames fall out via key comparison.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    pub fn phase(&self) -> ViewPhase {
        self.view.phase()
    }

    pub fn pending_selection(&self) -> Option<(usize, Option<usize>)> {
        self.view.pending_selection()
    }

    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    /// Apply one input event. Synchronous and atomic; events are handled in
    /// delivery order.
    pub fn apply(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::PointerDown { index } => {
                if let Some(raw) = self.displayed_to_original(index) {
                    self.view.begin_select(raw);
                }
            }
            ChartEvent::PointerMove { index } => {
                if self.view.phase() == ViewPhase::Selecting {
                    if let Some(raw) = self.displayed_to_original(index) {
                        self.view.update_select(raw);
                    }
                }
            }
            ChartEvent::PointerUp => self.view.commit_select(),
            ChartEvent::PointerLeave => self.view.cancel_select(),
            ChartEvent::Wheel { delta_y } => self.view.wheel_zoom(delta_y, None),
            ChartEvent::Reset => self.view.reset(),
            ChartEvent::ToggleSeries { key } => self.visibility.toggle(&key),
        }
    }

    /// The decimated, viewport-sliced points for the current frame.
    pub fn visible_points(&mut self) -> &[DerivedPoint] {
        self.ensure_frame();
        self.frame
            .as_ref()
            .map(|f| f.points.as_slice())
            .unwrap_or(&[])
    }

    /// `(displayed, total)` point counts, where `total` is the raw series
    /// length; the dashboard surfaces these as "showing X of Y points" when
    /// fewer points are drawn than were loaded.
    pub fn display_counts(&mut self) -> (usize, usize) {
        self.ensure_frame();
        let displayed = self.frame.as_ref().map(|f| f.points.len()).unwrap_or(0);
        (displayed, self.store.len())
    }

    /// Export the current frame, restricted to visible series.
    pub fn export(&mut self, title: &str) -> CsvExport {
        self.ensure_frame();
        let points = self
            .frame
            .as_ref()
            .map(|f| f.points.as_slice())
            .unwrap_or(&[]);
        export_csv(points, &self.visibility, &self.config, title)
    }

    fn displayed_to_original(&mut self, index: usize) -> Option<usize> {
        self.ensure_frame();
        let frame = self.frame.as_ref()?;
        if frame.points.is_empty() {
            return None;
        }
        let clamped = index.min(frame.points.len() - 1);
        Some(frame.points[clamped].original_index)
    }

    fn ensure_derived(&mut self) {
        let fresh = self
            .derived
            .as_ref()
            .map(|d| d.version == self.store.version() && d.config == self.config)
            .unwrap_or(false);
        if !fresh {
            self.derived = Some(DerivedCache {
                version: self.store.version(),
                config: self.config.clone(),
                points: compute_derived(&self.store, &self.config),
            });
        }
    }

    fn ensure_frame(&mut self) {
        let viewport = self.view.viewport();
        let fresh = self
            .frame
            .as_ref()
            .map(|f| {
                f.version == self.store.version()
                    && f.config == self.config
                    && f.viewport == viewport
            })
            .unwrap_or(false);
        if fresh {
            return;
        }

        self.ensure_derived();
        let derived = self
            .derived
            .as_ref()
            .map(|d| d.points.as_slice())
            .unwrap_or(&[]);
        let window: &[DerivedPoint] = if derived.is_empty() {
            &[]
        } else {
            &derived[viewport.left..=viewport.right.min(derived.len() - 1)]
        };
        let points = lttb_by(window, self.config.decimation_threshold(), DerivedPoint::metric);

        self.frame = Some(FrameCache {
            version: self.store.version(),
            config: self.config.clone(),
            viewport,
            points,
        });
    }
}
