//! Navigation Header Component
//!
//! Fixed top bar: brand on the left, section links in the center, mobile
//! menu toggle on the right (shown under the mobile breakpoint via CSS).
//! Takes a compact presentation once the page scrolls past the threshold.

use dioxus::prelude::*;

/// Sections addressable from the nav: (element id, link label).
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Whether the page is scrolled past the navbar threshold
    pub scrolled: bool,
    /// Id of the section to highlight, if any
    pub active: Option<String>,
    /// Whether the mobile menu is open
    pub menu_open: bool,
    /// Callback with the target section id when a link is clicked
    pub on_navigate: EventHandler<String>,
    /// Callback when the mobile toggle is clicked
    pub on_toggle_menu: EventHandler<()>,
}

/// Fixed navigation bar.
///
/// The `scrolled` class drives the compact/backdrop presentation; exactly
/// one link carries `active` at a time, following the scroll position.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let navbar_class = if props.scrolled { "navbar scrolled" } else { "navbar" };
    let toggle_class = if props.menu_open {
        "mobile-toggle active"
    } else {
        "mobile-toggle"
    };

    rsx! {
        header { class: "{navbar_class}",
            div { class: "navbar-inner",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        props.on_navigate.call("home".to_string());
                    },
                    "Portfolio"
                }

                nav { class: "nav-menu",
                    for (id, label) in NAV_SECTIONS {
                        a {
                            class: if props.active.as_deref() == Some(id) { "nav-link active" } else { "nav-link" },
                            href: "#{id}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                props.on_navigate.call(id.to_string());
                            },
                            "{label}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "{toggle_class}",
                    onclick: move |_| props.on_toggle_menu.call(()),
                    "aria-label": "Toggle navigation menu",
                    "aria-expanded": "{props.menu_open}",

                    span { class: "toggle-bar" }
                    span { class: "toggle-bar" }
                    span { class: "toggle-bar" }
                }
            }
        }
    }
}
