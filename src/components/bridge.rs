//! Webview geometry bridge.
//!
//! The state machines in portfolio-core are headless; this module feeds
//! them. Small scripts injected into the webview push scroll, resize, and
//! pointer events to Rust as JSON payloads, batched through
//! requestAnimationFrame on the JS side so a scroll burst costs one frame,
//! not one message per event.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::scroll::SectionAnchor;
use serde::Deserialize;

/// One geometry observation of the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewportFrame {
    pub scroll_y: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Sections addressable from the nav, with document-space tops
    pub sections: Vec<SectionAnchor>,
    /// Watched reveal elements, with viewport-relative rects
    pub reveals: Vec<RevealRect>,
}

/// Viewport-relative rect of one `data-reveal` element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealRect {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Pointer position normalized to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerFrame {
    pub x: f64,
    pub y: f64,
}

const VIEWPORT_SCRIPT: &str = r#"
const frame = () => ({
    scroll_y: window.scrollY,
    viewport_width: window.innerWidth,
    viewport_height: window.innerHeight,
    sections: Array.from(document.querySelectorAll('section[id]')).map((s) => ({
        id: s.id,
        top: s.offsetTop,
    })),
    reveals: Array.from(document.querySelectorAll('[data-reveal]')).map((el) => {
        const r = el.getBoundingClientRect();
        return { id: el.dataset.reveal, top: r.top, height: r.height };
    }),
});
let ticking = false;
const emit = () => { dioxus.send(frame()); ticking = false; };
const schedule = () => {
    if (!ticking) {
        ticking = true;
        requestAnimationFrame(emit);
    }
};
window.addEventListener('scroll', schedule, { passive: true });
window.addEventListener('resize', schedule);
emit();
"#;

const POINTER_SCRIPT: &str = r#"
window.addEventListener('mousemove', (e) => {
    dioxus.send({
        x: e.clientX / window.innerWidth,
        y: e.clientY / window.innerHeight,
    });
});
"#;

/// Latest geometry frame from the webview, None until the page reports in.
pub fn use_viewport_frame() -> Signal<Option<ViewportFrame>> {
    let mut frame = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(VIEWPORT_SCRIPT);
            loop {
                match eval.recv::<serde_json::Value>().await {
                    Ok(raw) => match serde_json::from_value::<ViewportFrame>(raw) {
                        Ok(parsed) => frame.set(Some(parsed)),
                        Err(e) => tracing::warn!(error = %e, "Ignoring malformed viewport frame"),
                    },
                    Err(e) => {
                        tracing::warn!(error = ?e, "Viewport bridge closed");
                        break;
                    }
                }
            }
        });
    });

    frame
}

/// Latest normalized pointer position, None until the pointer moves.
pub fn use_pointer_frame() -> Signal<Option<PointerFrame>> {
    let mut pointer = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(POINTER_SCRIPT);
            loop {
                match eval.recv::<PointerFrame>().await {
                    Ok(p) => pointer.set(Some(p)),
                    Err(e) => {
                        tracing::warn!(error = ?e, "Pointer bridge closed");
                        break;
                    }
                }
            }
        });
    });

    pointer
}

/// Smooth-scroll the page to an absolute position.
pub fn scroll_to(top: f64) {
    document::eval(&format!(
        "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_frame_parses_bridge_payload() {
        // Shape produced by VIEWPORT_SCRIPT
        let raw = serde_json::json!({
            "scroll_y": 420.5,
            "viewport_width": 1100.0,
            "viewport_height": 820.0,
            "sections": [
                { "id": "home", "top": 0.0 },
                { "id": "contact", "top": 3600.0 },
            ],
            "reveals": [
                { "id": "about-card", "top": -12.0, "height": 340.0 },
            ],
        });

        let frame: ViewportFrame = serde_json::from_value(raw).unwrap();
        assert_eq!(frame.sections.len(), 2);
        assert_eq!(frame.sections[1].id, "contact");
        assert_eq!(frame.reveals[0].top, -12.0);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let raw = serde_json::json!({ "scroll_y": "not a number" });
        assert!(serde_json::from_value::<ViewportFrame>(raw).is_err());
    }

    #[test]
    fn test_pointer_frame_parses() {
        let raw = serde_json::json!({ "x": 0.25, "y": 0.75 });
        let p: PointerFrame = serde_json::from_value(raw).unwrap();
        assert_eq!(p.x, 0.25);
        assert_eq!(p.y, 0.75);
    }
}
