//! Mobile Navigation Component
//!
//! Slide-in menu for viewports under the mobile breakpoint. Closed by
//! navigation, by the Escape key, and by resizing past the breakpoint
//! (the resize close lives with the geometry handling in the page).

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::menu::MobileMenu;

use crate::components::nav_header::NAV_SECTIONS;

const ESCAPE_SCRIPT: &str = r#"
window.addEventListener('keydown', (e) => {
    if (e.key === 'Escape') { dioxus.send('escape'); }
});
"#;

/// Close the mobile menu whenever Escape is pressed in the webview.
pub fn use_escape_close(mut menu: Signal<MobileMenu>) {
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(ESCAPE_SCRIPT);
            while eval.recv::<String>().await.is_ok() {
                menu.with_mut(|m| m.close());
            }
        });
    });
}

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Whether the menu is open
    pub open: bool,
    /// Callback with the target section id when a link is clicked
    pub on_navigate: EventHandler<String>,
}

/// Slide-in mobile menu, hidden on desktop via CSS.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let menu_class = if props.open {
        "mobile-menu active"
    } else {
        "mobile-menu"
    };
    let hidden = !props.open;

    rsx! {
        nav { class: "{menu_class}", "aria-hidden": "{hidden}",
            for (id, label) in NAV_SECTIONS {
                a {
                    class: "mobile-menu-link",
                    href: "#{id}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        props.on_navigate.call(id.to_string());
                    },
                    "{label}"
                }
            }
        }
    }
}
