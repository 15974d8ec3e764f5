// File: crates/chart-engine/src/view.rs
// Summary: First-class viewport state: visible index range over the raw
// series plus the drag-selection state machine and wheel-zoom arithmetic.

use crate::types::MIN_VISIBLE_RANGE;

/// The currently visible index window over the raw series.
/// Invariant: `left <= right`, both within bounds (both 0 when the series
/// is empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub left: usize,
    pub right: usize,
}

impl Viewport {
    pub fn full(len: usize) -> Self {
        Self {
            left: 0,
            right: len.saturating_sub(1),
        }
    }

    /// Number of visible points; a viewport is never empty.
    pub fn count(&self) -> usize {
        self.right - self.left + 1
    }
}

/// Observable phase of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// Viewport covers the full range.
    Idle,
    /// Viewport is a proper sub-range.
    Zoomed,
    /// A drag gesture holds an anchor and possibly a draft end.
    Selecting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Selection {
    anchor: usize,
    draft: Option<usize>,
}

/// Tracks the visible index range, driven by drag/wheel/reset events.
/// Every operation clamps silently; none can fail or leave `left > right`.
#[derive(Clone, Debug)]
pub struct ViewportController {
    len: usize,
    viewport: Viewport,
    selection: Option<Selection>,
}

impl ViewportController {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            viewport: Viewport::full(len),
            selection: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn phase(&self) -> ViewPhase {
        if self.selection.is_some() {
            ViewPhase::Selecting
        } else if self.viewport == Viewport::full(self.len) {
            ViewPhase::Idle
        } else {
            ViewPhase::Zoomed
        }
    }

    /// Raw-index `(anchor, draft)` of an in-progress drag, for brush overlays.
    pub fn pending_selection(&self) -> Option<(usize, Option<usize>)> {
        self.selection.map(|s| (s.anchor, s.draft))
    }

    /// Start a drag gesture. Starting a new gesture cancels any previous one.
    pub fn begin_select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.selection = Some(Selection {
            anchor: self.clamp_index(index),
            draft: None,
        });
    }

    /// Move the draft end of the drag. A no-op unless a gesture is active.
    pub fn update_select(&mut self, index: usize) {
        let clamped = self.clamp_index(index);
        if let Some(sel) = self.selection.as_mut() {
            sel.draft = Some(clamped);
        }
    }

    /// Commit the drag. A degenerate selection (no draft, or anchor equals
    /// draft) reverts to the prior viewport. Tolerates a commit without a
    /// preceding `begin_select` as a no-op.
    pub fn commit_select(&mut self) {
        let Some(sel) = self.selection.take() else {
            return;
        };
        match sel.draft {
            Some(draft) if draft != sel.anchor => {
                self.viewport = Viewport {
                    left: sel.anchor.min(draft),
                    right: sel.anchor.max(draft),
                };
            }
            _ => {}
        }
    }

    /// Abandon an in-progress drag, keeping the prior viewport (pointer left
    /// the interactive surface).
    pub fn cancel_select(&mut self) {
        self.selection = None;
    }

    /// Wheel zoom around the midpoint of the current range (or an explicit
    /// center when the caller supplies one). Positive `delta_y` zooms out by
    /// 10%, anything else zooms in by 10%; the resulting range never drops
    /// below `MIN_VISIBLE_RANGE` and never leaves the series bounds. Acting
    /// on the wheel cancels a pending drag.
    pub fn wheel_zoom(&mut self, delta_y: f64, center_hint: Option<usize>) {
        self.selection = None;
        if self.len == 0 {
            return;
        }
        let last = (self.len - 1) as i64;
        let Viewport { left, right } = self.viewport;

        let factor = if delta_y > 0.0 { 1.1 } else { 0.9 };
        let current_range = (right - left) as f64;
        let new_range = ((current_range * factor).round() as i64).max(MIN_VISIBLE_RANGE as i64);
        let center = match center_hint {
            Some(c) => (c as i64).min(last),
            None => ((left + right) / 2) as i64,
        };

        let mut new_left = (center - new_range / 2).clamp(0, last);
        let mut new_right = (new_left + new_range).clamp(0, last);
        // Hit the right edge: shift the left bound to keep the range width.
        if new_right - new_left < new_range && new_right == last {
            new_left = (new_right - new_range).max(0);
        }

        self.viewport = Viewport {
            left: new_left as usize,
            right: new_right as usize,
        };
    }

    /// Back to the full range, unconditionally.
    pub fn reset(&mut self) {
        self.selection = None;
        self.viewport = Viewport::full(self.len);
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }
}
