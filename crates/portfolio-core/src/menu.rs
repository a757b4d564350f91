//! Mobile menu state.
//!
//! Open/closed toggle for the slide-in navigation, closed automatically by
//! smooth-scroll navigation, by the Escape key, and when the viewport leaves
//! the mobile layout.

/// Viewport width at which the mobile menu gives way to the desktop nav.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true when it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close when the viewport resizes past the mobile breakpoint.
    /// Returns true when this closed the menu.
    pub fn handle_resize(&mut self, viewport_width: f64) -> bool {
        if viewport_width > MOBILE_BREAKPOINT {
            self.close()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());

        assert!(menu.toggle());
        assert!(menu.is_open());

        assert!(menu.close());
        assert!(!menu.is_open());
        assert!(!menu.close());
    }

    #[test]
    fn test_resize_closes_only_past_breakpoint() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        assert!(!menu.handle_resize(MOBILE_BREAKPOINT));
        assert!(menu.is_open());

        assert!(menu.handle_resize(MOBILE_BREAKPOINT + 1.0));
        assert!(!menu.is_open());

        // Closed menu stays closed on further resizes.
        assert!(!menu.handle_resize(1200.0));
    }
}
