//! Contact form component.
//!
//! Drives one submission attempt at a time through the shared controller:
//! pending presentation on submit, success or failure presentation plus a
//! notification on resolution, and an idempotent reset back to the idle
//! presentation after the fixed delay. Fields are cleared on success only.
//!
//! The submit control is disabled while an attempt is pending; that
//! presentation-level guard is the only protection against double
//! submission.

use dioxus::prelude::*;
use portfolio_core::notify::NotificationKind;
use portfolio_core::submission::{ContactMessage, SubmissionStatus, RESET_DELAY};

use crate::context::use_services;

/// Label for the submit control in each presentation state.
fn submit_label(status: Option<SubmissionStatus>) -> &'static str {
    match status {
        None => "Send Message",
        Some(SubmissionStatus::Pending) => "Sending...",
        Some(SubmissionStatus::Succeeded) => "Message Sent!",
        Some(SubmissionStatus::Failed) => "Failed to Send",
    }
}

/// Class list for the submit control in each presentation state.
fn submit_class(status: Option<SubmissionStatus>) -> &'static str {
    match status {
        None => "submit-btn",
        Some(SubmissionStatus::Pending) => "submit-btn pending",
        Some(SubmissionStatus::Succeeded) => "submit-btn succeeded",
        Some(SubmissionStatus::Failed) => "submit-btn failed",
    }
}

#[component]
pub fn ContactForm() -> Element {
    let services = use_services();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut status: Signal<Option<SubmissionStatus>> = use_signal(|| None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if matches!(status(), Some(SubmissionStatus::Pending)) {
            return;
        }

        let message = ContactMessage {
            name: name(),
            email: email(),
            subject: subject(),
            body: body(),
        };

        status.set(Some(SubmissionStatus::Pending));
        let services = services.clone();

        spawn(async move {
            let outcome = {
                let mut controller = services.controller.write().await;
                controller.submit(message).await
            };
            status.set(Some(outcome));

            match outcome {
                SubmissionStatus::Succeeded => {
                    services.notifications.notify(
                        "Message sent successfully! I'll get back to you soon.",
                        NotificationKind::Success,
                    );
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                }
                SubmissionStatus::Failed => {
                    // Fields are kept so the visitor can retry.
                    services.notifications.notify(
                        "Failed to send message. Please try again.",
                        NotificationKind::Error,
                    );
                }
                SubmissionStatus::Pending => {}
            }

            tokio::time::sleep(RESET_DELAY).await;
            services.controller.write().await.reset();
            status.set(None);
        });
    };

    let pending = matches!(status(), Some(SubmissionStatus::Pending));

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            div { class: "form-row",
                div { class: "form-field",
                    label { class: "field-label", r#for: "contact-name", "Name" }
                    input {
                        id: "contact-name",
                        class: "field-input",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "field-label", r#for: "contact-email", "Email" }
                    input {
                        id: "contact-email",
                        class: "field-input",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
            }

            div { class: "form-field",
                label { class: "field-label", r#for: "contact-subject", "Subject" }
                input {
                    id: "contact-subject",
                    class: "field-input",
                    r#type: "text",
                    value: "{subject}",
                    oninput: move |e| subject.set(e.value()),
                }
            }

            div { class: "form-field",
                label { class: "field-label", r#for: "contact-body", "Message" }
                textarea {
                    id: "contact-body",
                    class: "field-input field-textarea",
                    required: true,
                    rows: "6",
                    value: "{body}",
                    oninput: move |e| body.set(e.value()),
                }
            }

            button {
                r#type: "submit",
                class: "{submit_class(status())}",
                disabled: pending,

                if pending {
                    span { class: "spinner", "aria-hidden": "true" }
                }
                span { "{submit_label(status())}" }
            }
        }
    }
}
