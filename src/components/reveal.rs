//! Reveal wrapper component.
//!
//! Tags its content with `data-reveal` so the geometry bridge reports its
//! rect, and applies the `visible` class once the tracker has flipped the
//! element's one-way flag.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RevealableProps {
    /// Id the tracker knows this element by
    pub id: String,
    /// Entry animation class ("fade-in", "slide-in-left", ...)
    #[props(default = "fade-in".to_string())]
    pub animation: String,
    /// Whether the tracker has revealed this element
    pub visible: bool,
    pub children: Element,
}

#[component]
pub fn Revealable(props: RevealableProps) -> Element {
    let class = if props.visible {
        format!("{} visible", props.animation)
    } else {
        props.animation.clone()
    };

    rsx! {
        div { class: "{class}", "data-reveal": "{props.id}", {props.children} }
    }
}
