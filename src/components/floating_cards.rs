//! Floating decorative cards with parallax.
//!
//! Each card drifts with the scroll position and leans toward the pointer;
//! the offset formulas live in portfolio-core so they are testable. Purely
//! cosmetic, so a missing pointer frame just means no lean.

use dioxus::prelude::*;
use portfolio_core::scroll::{pointer_parallax_offset, scroll_parallax_offset};

use crate::components::bridge::PointerFrame;

/// Labels on the decorative hero cards.
const CARDS: [&str; 3] = ["Rust", "Dioxus", "Tokio"];

#[derive(Props, Clone, PartialEq)]
pub struct FloatingCardsProps {
    /// Current scroll position
    pub scroll_y: f64,
    /// Latest normalized pointer position, if the pointer has moved
    pub pointer: Option<PointerFrame>,
}

#[component]
pub fn FloatingCards(props: FloatingCardsProps) -> Element {
    rsx! {
        div { class: "floating-cards", "aria-hidden": "true",
            for (index, label) in CARDS.iter().enumerate() {
                {
                    let drift = scroll_parallax_offset(props.scroll_y, index);
                    let (lean_x, lean_y) = props
                        .pointer
                        .map(|p| pointer_parallax_offset(p.x, p.y, index))
                        .unwrap_or((0.0, 0.0));
                    let transform =
                        format!("translate({lean_x:.2}px, {:.2}px)", drift + lean_y);

                    rsx! {
                        div {
                            class: "floating-card floating-card-{index}",
                            style: "transform: {transform};",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
