//! Project filter and skill bar animation timing.

use std::time::Duration;

/// Per-card delay when a filter change restyles the project grid.
pub const CARD_STAGGER: Duration = Duration::from_millis(100);

/// Delay before a shown card raises into place.
pub const CARD_RAISE_DELAY: Duration = Duration::from_millis(50);

/// Fade-out duration before a filtered-out card is hidden.
pub const CARD_FADE_OUT: Duration = Duration::from_millis(300);

/// Per-bar delay for the skill bar fill animation.
pub const SKILL_STAGGER: Duration = Duration::from_millis(200);

/// Active project filter: everything, or one category token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a filter button token; "all" selects everything.
    pub fn from_token(token: &str) -> Self {
        if token == "all" {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(token.to_string())
        }
    }

    /// Token this filter was built from.
    pub fn token(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(token) => token,
        }
    }

    /// Whether a card with the given space-separated category list should
    /// show. Matches by substring over the list, as the page's filter
    /// attribute comparison does.
    pub fn matches(&self, categories: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(token) => categories.contains(token.as_str()),
        }
    }
}

/// Stagger delay for project card `index` after a filter change.
pub fn card_stagger_delay(index: usize) -> Duration {
    CARD_STAGGER * index as u32
}

/// Fill animation delay for skill bar `index`.
pub fn skill_bar_delay(index: usize) -> Duration {
    SKILL_STAGGER * index as u32
}

/// Target width of a skill bar, clamped to a valid percentage.
pub fn skill_bar_width(progress: u32) -> u32 {
    progress.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_tokens_roundtrip() {
        assert_eq!(ProjectFilter::from_token("all"), ProjectFilter::All);
        assert_eq!(ProjectFilter::from_token("web").token(), "web");
    }

    #[test]
    fn test_all_matches_everything() {
        let filter = ProjectFilter::All;
        assert!(filter.matches("web tools"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_category_matching() {
        let filter = ProjectFilter::from_token("web");
        assert!(filter.matches("web"));
        assert!(filter.matches("web tools"));
        assert!(!filter.matches("systems"));
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(card_stagger_delay(0), Duration::ZERO);
        assert_eq!(card_stagger_delay(3), Duration::from_millis(300));
        assert_eq!(skill_bar_delay(2), Duration::from_millis(400));
    }

    #[test]
    fn test_skill_bar_width_clamped() {
        assert_eq!(skill_bar_width(85), 85);
        assert_eq!(skill_bar_width(150), 100);
    }
}
