//! UI components for the portfolio shell.

pub mod bridge;
mod contact_form;
mod floating_cards;
mod mobile_nav;
mod nav_header;
mod notification_host;
mod reveal;

pub use contact_form::ContactForm;
pub use floating_cards::FloatingCards;
pub use mobile_nav::{use_escape_close, MobileNav};
pub use nav_header::NavHeader;
pub use notification_host::NotificationHost;
pub use reveal::Revealable;
