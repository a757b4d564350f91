//! Notification host component.
//!
//! Renders the notification center's single live slot. Subscribes to the
//! center's watch channel once and mirrors every snapshot into a signal;
//! the phase drives the entry/exit transition classes, so the timing logic
//! stays in portfolio-core.

use dioxus::prelude::*;
use portfolio_core::notify::{Notification, NotificationPhase};

use crate::context::use_services;

#[component]
pub fn NotificationHost() -> Element {
    let services = use_services();
    let mut current: Signal<Option<Notification>> = use_signal(|| None);

    let center = services.notifications.clone();
    use_effect(move || {
        let center = center.clone();
        spawn(async move {
            let mut rx = center.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                current.set(snapshot);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    let dismiss = {
        let center = services.notifications.clone();
        move |_| center.dismiss()
    };

    rsx! {
        if let Some(n) = current() {
            div {
                class: "{notification_class(&n)}",
                role: "status",
                "aria-live": "polite",

                div { class: "notification-content",
                    span { class: "notification-glyph", "{n.kind.glyph()}" }
                    span { class: "notification-message", "{n.message}" }
                }
                button {
                    r#type: "button",
                    class: "notification-close",
                    "aria-label": "Dismiss notification",
                    onclick: dismiss,
                    "\u{00D7}"
                }
            }
        }
    }
}

/// Full class list for a notification in its current phase.
fn notification_class(n: &Notification) -> String {
    let phase = match n.phase {
        NotificationPhase::Entering => "entering",
        NotificationPhase::Shown => "shown",
        NotificationPhase::Leaving => "leaving",
    };
    format!("notification {} {phase}", n.kind.css_class())
}
