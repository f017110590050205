//! Page progress and active-section detection.
//!
//! Everything here is plain arithmetic over measurements taken from the DOM,
//! so the browser wiring in `app::scroll` stays a thin shell around it.

use crate::sections::Section;

/// Below this offset the first section is always active.
pub const TOP_THRESHOLD: f64 = 100.0;
/// Distance below the viewport top used to probe for the active section.
pub const LOOKAHEAD: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Fraction of the scrollable distance covered, in `[0, 1]`. A page that
    /// fits in the viewport has nothing to scroll and reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if !(scrollable > 0.0) || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

/// Measured vertical extent of one section element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub progress: f64,
    pub active: Option<&'static str>,
}

/// Keeps the last active section so that gaps between sections do not
/// clear the highlight.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recompute state from fresh metrics. `measure` returns the bounds of a
    /// section, or `None` when its element is not in the document.
    pub fn observe<F>(&mut self, metrics: ScrollMetrics, sections: &[Section], mut measure: F) -> ScrollState
    where
        F: FnMut(&Section) -> Option<SectionBounds>,
    {
        self.state.progress = metrics.progress();

        if metrics.offset < TOP_THRESHOLD {
            if let Some(first) = sections.first() {
                self.state.active = Some(first.id);
            }
            return self.state;
        }

        let probe = metrics.offset + LOOKAHEAD;
        if let Some(hit) = sections
            .iter()
            .find(|s| measure(*s).is_some_and(|b| b.contains(probe)))
        {
            self.state.active = Some(hit.id);
        }
        self.state
    }
}
