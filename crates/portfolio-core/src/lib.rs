//! Portfolio Presentation Core
//!
//! Headless state machines behind the portfolio desktop shell: the contact
//! form submission flow, the transient notification lifecycle, scroll-driven
//! reveal tracking, and the navbar / parallax scroll reactors.
//!
//! Nothing in this crate touches the UI framework. The Dioxus shell in the
//! root crate feeds geometry and events in and renders the resulting state,
//! which keeps every lifecycle testable with a paused tokio clock.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio_core::{
//!     ContactMessage, NotificationCenter, NotificationKind, SimulatedGateway,
//!     SubmissionController, SubmissionStatus,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let notifications = NotificationCenter::new();
//!     let mut controller = SubmissionController::new(Arc::new(SimulatedGateway::new()));
//!
//!     match controller.submit(ContactMessage::default()).await {
//!         SubmissionStatus::Succeeded => {
//!             notifications.notify("Message sent!", NotificationKind::Success);
//!         }
//!         _ => {
//!             notifications.notify("Failed to send.", NotificationKind::Error);
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod menu;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod showcase;
pub mod submission;

// Re-exports
pub use error::{PortfolioError, PortfolioResult};
pub use menu::{MobileMenu, MOBILE_BREAKPOINT};
pub use notify::{
    Notification, NotificationCenter, NotificationId, NotificationKind, NotificationPhase,
    NOTIFICATION_ENTER_DELAY, NOTIFICATION_EXIT_DURATION, NOTIFICATION_LIFETIME,
};
pub use reveal::{ElementRect, RevealTracker, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};
pub use scroll::{
    ScrollModel, SectionAnchor, NAVBAR_SCROLL_THRESHOLD, NAV_HEIGHT, SECTION_LOOKAHEAD,
};
pub use showcase::ProjectFilter;
pub use submission::{
    ContactMessage, MessageGateway, SimulatedGateway, SubmissionAttempt, SubmissionController,
    SubmissionStatus, SubmitError, RESET_DELAY, SUBMIT_LATENCY, SUCCESS_RATE,
};
