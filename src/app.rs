//! Root application component.
//!
//! Provides global styles and the service context, then renders the single
//! scrolling portfolio page. The page is one document, so there is no
//! router; navigation is smooth-scrolling between sections.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::context::Services;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    // Explicit service objects instead of ambient globals.
    use_context_provider(|| Services::new(Arc::new(crate::simulated_gateway())));

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
