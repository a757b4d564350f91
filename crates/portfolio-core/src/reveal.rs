//! Scroll-driven reveal tracking.
//!
//! Elements reveal once: the `visible` flag is monotonic (false to true,
//! never back). An element counts as in view when at least 10 % of its area
//! sits inside the viewport reduced by a 50 px bottom margin, matching the
//! page's entry-animation trigger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fraction of an element's area that must be in view to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Exclusion band at the bottom of the viewport, in pixels.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Viewport-relative bounding box of a watched element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    /// Distance from the viewport top to the element top (may be negative).
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Fraction of the element inside the viewport, with the bottom margin
    /// excluded. Zero-height elements never count as visible.
    pub fn visible_ratio(&self, viewport_height: f64) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let band_bottom = viewport_height - REVEAL_BOTTOM_MARGIN;
        let visible_top = self.top.max(0.0);
        let visible_bottom = self.bottom().min(band_bottom);
        (visible_bottom - visible_top).max(0.0) / self.height
    }
}

/// Tracks the one-way visible flag of each revealable element.
#[derive(Debug, Default)]
pub struct RevealTracker {
    elements: BTreeMap<String, bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element as hidden. Re-registering a revealed element
    /// keeps it revealed.
    pub fn register(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    /// Feed one geometry observation. Returns true when this observation
    /// newly revealed the element; repeat signals are no-ops.
    pub fn observe(&mut self, id: &str, rect: ElementRect, viewport_height: f64) -> bool {
        let visible = self.elements.entry(id.to_string()).or_insert(false);
        if *visible {
            return false;
        }
        if rect.visible_ratio(viewport_height) >= REVEAL_THRESHOLD {
            tracing::trace!(id, "Element revealed");
            *visible = true;
            return true;
        }
        false
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }

    /// Ids of all revealed elements, in registration-independent order.
    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn rect(top: f64, height: f64) -> ElementRect {
        ElementRect { top, height }
    }

    #[test]
    fn test_fully_visible_element() {
        assert_eq!(rect(100.0, 200.0).visible_ratio(VIEWPORT), 1.0);
    }

    #[test]
    fn test_element_below_viewport() {
        assert_eq!(rect(900.0, 200.0).visible_ratio(VIEWPORT), 0.0);
    }

    #[test]
    fn test_bottom_margin_excluded() {
        // Top edge right at the margin band: nothing of it counts.
        let r = rect(VIEWPORT - REVEAL_BOTTOM_MARGIN, 200.0);
        assert_eq!(r.visible_ratio(VIEWPORT), 0.0);

        // 30 px above the band: 30 of 200 px visible, still below threshold.
        let r = rect(VIEWPORT - REVEAL_BOTTOM_MARGIN - 30.0, 200.0);
        assert!(r.visible_ratio(VIEWPORT) < REVEAL_THRESHOLD);

        // 40 px above the band: 40 of 200 px = 20 %, over threshold.
        let r = rect(VIEWPORT - REVEAL_BOTTOM_MARGIN - 40.0, 200.0);
        assert!(r.visible_ratio(VIEWPORT) >= REVEAL_THRESHOLD);
    }

    #[test]
    fn test_zero_height_never_visible() {
        assert_eq!(rect(100.0, 0.0).visible_ratio(VIEWPORT), 0.0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut tracker = RevealTracker::new();
        tracker.register("hero");

        assert!(!tracker.is_visible("hero"));
        assert!(tracker.observe("hero", rect(100.0, 200.0), VIEWPORT));
        assert!(tracker.is_visible("hero"));

        // Scrolling it far out of view does not un-reveal.
        assert!(!tracker.observe("hero", rect(-5000.0, 200.0), VIEWPORT));
        assert!(tracker.is_visible("hero"));

        // Repeat in-view signals are no-ops.
        assert!(!tracker.observe("hero", rect(100.0, 200.0), VIEWPORT));
    }

    #[test]
    fn test_observe_registers_unknown_elements() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("about", rect(2000.0, 300.0), VIEWPORT));
        assert_eq!(tracker.len(), 1);
        assert!(!tracker.is_visible("about"));
    }

    #[test]
    fn test_revealed_listing() {
        let mut tracker = RevealTracker::new();
        tracker.register("a");
        tracker.register("b");
        tracker.observe("b", rect(10.0, 100.0), VIEWPORT);

        let revealed: Vec<&str> = tracker.revealed().collect();
        assert_eq!(revealed, vec!["b"]);
    }
}
