//! Navbar, active-section, and parallax scroll reactors.
//!
//! Unlike reveal flags, the navbar `scrolled` flag toggles in both
//! directions. Active-section highlighting picks the last section whose top,
//! minus a fixed lookahead, precedes the scroll position; recomputation is
//! driven by the shell's animation-frame-batched scroll bridge.

use serde::{Deserialize, Serialize};

/// Scroll depth above which the navbar takes its compact presentation.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Lookahead applied to section tops when picking the active section.
pub const SECTION_LOOKAHEAD: f64 = 100.0;

/// Height of the fixed navbar; smooth-scroll targets land below it.
pub const NAV_HEIGHT: f64 = 80.0;

/// A page section addressable from the nav, with its document-space top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
}

/// Navbar presentation state derived from the scroll position.
#[derive(Debug, Default)]
pub struct ScrollModel {
    scrolled: bool,
    active_section: Option<String>,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the page is scrolled past the navbar threshold.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Id of the section the nav should highlight, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Recompute from a scroll position. Returns true when either the
    /// scrolled flag or the active section changed.
    pub fn observe(&mut self, scroll_y: f64, sections: &[SectionAnchor]) -> bool {
        let scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD;
        let active = active_section(scroll_y, sections).map(str::to_string);

        let changed = scrolled != self.scrolled || active != self.active_section;
        self.scrolled = scrolled;
        self.active_section = active;
        changed
    }
}

/// Last section whose top, minus the lookahead, precedes the scroll
/// position. None when the list is empty or nothing has been reached yet.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [SectionAnchor]) -> Option<&'a str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SECTION_LOOKAHEAD {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll target for a smooth-scroll navigation to a section top.
pub fn smooth_scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_HEIGHT).max(0.0)
}

/// Vertical parallax offset of floating card `index` at a scroll position.
pub fn scroll_parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = 0.5 + index as f64 * 0.1;
    scroll_y * speed * 0.1
}

/// Pointer parallax translation of floating card `index`. Pointer
/// coordinates are normalized to `0.0..=1.0` over the viewport.
pub fn pointer_parallax_offset(x_norm: f64, y_norm: f64, index: usize) -> (f64, f64) {
    let speed = (index as f64 + 1.0) * 0.5;
    ((x_norm - 0.5) * speed, (y_norm - 0.5) * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionAnchor> {
        ["home", "about", "projects", "skills", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionAnchor {
                id: id.to_string(),
                top: i as f64 * 900.0,
            })
            .collect()
    }

    #[test]
    fn test_scrolled_toggles_both_ways() {
        let mut model = ScrollModel::new();
        let sections = sections();

        assert!(model.observe(150.0, &sections));
        assert!(model.scrolled());

        assert!(model.observe(50.0, &sections));
        assert!(!model.scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut model = ScrollModel::new();
        model.observe(NAVBAR_SCROLL_THRESHOLD, &[]);
        assert!(!model.scrolled());

        model.observe(NAVBAR_SCROLL_THRESHOLD + 1.0, &[]);
        assert!(model.scrolled());
    }

    #[test]
    fn test_active_section_progression() {
        let sections = sections();

        assert_eq!(active_section(0.0, &sections), Some("home"));
        // Lookahead pulls the next section in before its top is reached.
        assert_eq!(active_section(800.0, &sections), Some("about"));
        assert_eq!(active_section(799.0, &sections), Some("home"));
        assert_eq!(active_section(3600.0, &sections), Some("contact"));
    }

    #[test]
    fn test_no_sections_means_no_active_link() {
        assert_eq!(active_section(500.0, &[]), None);

        let mut model = ScrollModel::new();
        model.observe(500.0, &[]);
        assert_eq!(model.active_section(), None);
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let mut model = ScrollModel::new();
        let sections = sections();

        assert!(model.observe(200.0, &sections));
        // Same derived state: not a change.
        assert!(!model.observe(210.0, &sections));
        assert!(model.observe(900.0, &sections));
    }

    #[test]
    fn test_smooth_scroll_target() {
        assert_eq!(smooth_scroll_target(900.0), 820.0);
        // Targets near the document top clamp to zero.
        assert_eq!(smooth_scroll_target(40.0), 0.0);
    }

    #[test]
    fn test_scroll_parallax_speeds_increase_with_index() {
        let y = 400.0;
        assert_eq!(scroll_parallax_offset(y, 0), 400.0 * 0.5 * 0.1);
        assert!(scroll_parallax_offset(y, 2) > scroll_parallax_offset(y, 0));
    }

    #[test]
    fn test_pointer_parallax_centered_pointer_is_neutral() {
        assert_eq!(pointer_parallax_offset(0.5, 0.5, 3), (0.0, 0.0));

        let (x, y) = pointer_parallax_offset(1.0, 0.0, 1);
        assert_eq!(x, 0.5);
        assert_eq!(y, -0.5);
    }
}
