//! The portfolio page.
//!
//! One scrolling document: hero, about, projects, skills, contact. Owns the
//! page-level state (scroll model, reveal tracker, mobile menu, project
//! filter) and feeds it from the geometry bridge; components below receive
//! derived state as props.

use dioxus::prelude::*;
use portfolio_core::menu::MobileMenu;
use portfolio_core::reveal::{ElementRect, RevealTracker};
use portfolio_core::scroll::{smooth_scroll_target, ScrollModel};
use portfolio_core::showcase::{
    card_stagger_delay, skill_bar_delay, skill_bar_width, ProjectFilter,
};

use crate::components::bridge;
use crate::components::{
    use_escape_close, ContactForm, FloatingCards, MobileNav, NavHeader, NotificationHost,
    Revealable,
};

struct Project {
    title: &'static str,
    description: &'static str,
    /// Space-separated category tokens the filter matches against
    categories: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Sync Engine",
        description: "Local-first task sharing over peer-to-peer gossip.",
        categories: "systems tools",
    },
    Project {
        title: "Image Lens",
        description: "Desktop image browser with on-device upscaling.",
        categories: "tools",
    },
    Project {
        title: "Crate Atlas",
        description: "Dependency graph explorer for Rust workspaces.",
        categories: "web tools",
    },
    Project {
        title: "Trace Deck",
        description: "Structured log viewer for tracing spans.",
        categories: "web systems",
    },
];

const FILTERS: [&str; 4] = ["all", "web", "systems", "tools"];

const SKILLS: [(&str, u32); 5] = [
    ("Rust", 90),
    ("Async / Tokio", 85),
    ("UI (Dioxus)", 75),
    ("Databases", 70),
    ("Networking", 65),
];

#[component]
pub fn Home() -> Element {
    let frame = bridge::use_viewport_frame();
    let pointer = bridge::use_pointer_frame();

    let mut scroll_model = use_signal(ScrollModel::new);
    let mut tracker = use_signal(RevealTracker::new);
    let mut menu = use_signal(MobileMenu::default);
    let mut filter = use_signal(ProjectFilter::default);

    use_escape_close(menu);

    // Feed every geometry frame into the page-level state machines.
    use_effect(move || {
        if let Some(f) = frame() {
            scroll_model.with_mut(|m| m.observe(f.scroll_y, &f.sections));
            tracker.with_mut(|t| {
                for r in &f.reveals {
                    let rect = ElementRect {
                        top: r.top,
                        height: r.height,
                    };
                    t.observe(&r.id, rect, f.viewport_height);
                }
            });
            menu.with_mut(|m| m.handle_resize(f.viewport_width));
        }
    });

    // Smooth-scroll navigation; closes the mobile menu first, as tapping a
    // link should.
    let navigate = move |id: String| {
        menu.with_mut(|m| {
            m.close();
        });
        let top = frame()
            .and_then(|f| f.sections.into_iter().find(|s| s.id == id))
            .map(|s| s.top);
        match top {
            Some(top) => bridge::scroll_to(smooth_scroll_target(top)),
            // Tolerated: no geometry yet means nothing to scroll to.
            None => tracing::debug!(section = %id, "No geometry for section, skipping scroll"),
        }
    };

    let scrolled = scroll_model.read().scrolled();
    let active = scroll_model.read().active_section().map(str::to_string);
    let scroll_y = frame().map(|f| f.scroll_y).unwrap_or(0.0);
    let skills_revealed = tracker.read().is_visible("skills-panel");

    rsx! {
        NavHeader {
            scrolled,
            active,
            menu_open: menu.read().is_open(),
            on_navigate: navigate,
            on_toggle_menu: move |_| {
                menu.with_mut(|m| {
                    m.toggle();
                });
            },
        }
        MobileNav { open: menu.read().is_open(), on_navigate: navigate }

        main { class: "page",
            section { id: "home", class: "hero",
                div { class: "hero-copy",
                    h1 { class: "hero-title", "Hi, I build things in Rust." }
                    p { class: "hero-tagline",
                        "Systems tooling, desktop apps, and the occasional web experiment."
                    }
                    button {
                        r#type: "button",
                        class: "hero-cta",
                        onclick: move |_| navigate("contact".to_string()),
                        "Get in touch"
                    }
                }
                FloatingCards { scroll_y, pointer: pointer() }
            }

            section { id: "about", class: "section",
                Revealable {
                    id: "about-intro",
                    animation: "slide-in-left",
                    visible: tracker.read().is_visible("about-intro"),

                    h2 { class: "section-title", "About" }
                    p { class: "section-body",
                        "I spend most of my time in Rust: async services, desktop UI, "
                        "and tooling that makes other developers faster. Before that, "
                        "years of shipping production systems taught me to keep state "
                        "machines small and observable."
                    }
                }
            }

            section { id: "projects", class: "section",
                Revealable {
                    id: "projects-intro",
                    visible: tracker.read().is_visible("projects-intro"),
                    h2 { class: "section-title", "Projects" }
                }

                div { class: "filter-bar", role: "group", "aria-label": "Filter projects",
                    for token in FILTERS {
                        button {
                            r#type: "button",
                            class: if filter.read().token() == token { "filter-btn active" } else { "filter-btn" },
                            onclick: move |_| filter.set(ProjectFilter::from_token(token)),
                            "{token}"
                        }
                    }
                }

                div { class: "project-grid",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        {
                            let shown = filter.read().matches(project.categories);
                            let delay = card_stagger_delay(index).as_millis();
                            rsx! {
                                article {
                                    class: if shown { "project-card" } else { "project-card hidden" },
                                    style: "transition-delay: {delay}ms;",

                                    h3 { class: "project-title", "{project.title}" }
                                    p { class: "project-description", "{project.description}" }
                                    div { class: "project-tags",
                                        for tag in project.categories.split_whitespace() {
                                            span { class: "project-tag", "{tag}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "skills", class: "section",
                Revealable {
                    id: "skills-panel",
                    visible: skills_revealed,

                    h2 { class: "section-title", "Skills" }
                    div { class: "skill-list",
                        for (index, (name, progress)) in SKILLS.iter().enumerate() {
                            {
                                // Bars fill only once the panel has revealed,
                                // staggered per bar.
                                let width = if skills_revealed {
                                    skill_bar_width(*progress)
                                } else {
                                    0
                                };
                                let delay = skill_bar_delay(index).as_millis();
                                rsx! {
                                    div { class: "skill-row",
                                        span { class: "skill-name", "{name}" }
                                        div { class: "skill-track",
                                            div {
                                                class: "skill-progress",
                                                style: "width: {width}%; transition-delay: {delay}ms;",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "contact", class: "section",
                Revealable {
                    id: "contact-panel",
                    animation: "slide-in-right",
                    visible: tracker.read().is_visible("contact-panel"),

                    h2 { class: "section-title", "Contact" }
                    p { class: "section-body", "Have a project in mind? Send a message." }
                    ContactForm {}
                }
            }

            footer { class: "footer",
                p { class: "footer-note", "Built with Rust and Dioxus." }
            }
        }

        NotificationHost {}
    }
}
