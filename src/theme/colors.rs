//! Color tokens for the portfolio theme.
//!
//! Dark editorial palette; the CSS custom properties in `styles.rs` carry
//! the same values into the webview.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const BG: &str = "#0b0d12";
pub const BG_RAISED: &str = "#11141c";
pub const BORDER: &str = "#1e2230";

// === ACCENT ===
pub const ACCENT: &str = "#6c63ff";
pub const ACCENT_ALT: &str = "#00d4aa";
pub const ACCENT_GLOW: &str = "rgba(108, 99, 255, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f4f8";
pub const TEXT_SECONDARY: &str = "rgba(242, 244, 248, 0.72)";
pub const TEXT_MUTED: &str = "rgba(242, 244, 248, 0.5)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#2ecc71";
pub const ERROR: &str = "#ff3b5c";
pub const WARNING: &str = "#ff9f1c";
