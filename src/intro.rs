use crate::constants::*;
use crate::dom;
use folio_core::constants::TYPE_START_DELAY_MS;
use folio_core::intro::{background_parallax, shape_parallax, TypeUpdate, Typewriter};
use folio_core::timing::Clock;
use folio_core::InstantClock;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARET_CSS: &str = "animation: blink 1s infinite; color: #A6B6CA; font-weight: 400;";
const BLINK_KEYFRAMES: &str =
    "@keyframes blink { 0%, 50% { opacity: 1; } 51%, 100% { opacity: 0; } }";

/// Types the hero title out behind a blinking caret, driven by the frame
/// loop.
pub struct TitleTyper {
    title: web::Element,
    caret: web::HtmlElement,
    writer: Typewriter,
}

impl TitleTyper {
    pub fn mount(document: &web::Document, clock: InstantClock) -> Option<Self> {
        let title = dom::query(document, HERO_TITLE)?;
        let text = title.text_content().unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let caret = document
            .create_element("span")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        caret.set_class_name(TYPING_CARET_CLASS);
        caret.set_text_content(Some("|"));
        caret.style().set_css_text(CARET_CSS);
        inject_blink_keyframes(document);

        log::debug!("[intro] typing {} chars", text.chars().count());
        Some(Self {
            writer: Typewriter::new(text, clock.now_ms() + TYPE_START_DELAY_MS),
            title,
            caret,
        })
    }

    /// Returns false once typing and the caret are both done.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match self.writer.poll(now_ms) {
            Some(TypeUpdate::Text(prefix)) => {
                self.title.set_text_content(Some(&prefix));
                _ = self.title.append_child(&self.caret);
            }
            Some(TypeUpdate::CaretDone) => self.caret.remove(),
            None => {}
        }
        !self.writer.is_finished()
    }
}

fn inject_blink_keyframes(document: &web::Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(BLINK_KEYFRAMES));
    _ = head.append_child(&style);
}

/// Hero shapes drift and spin with the scroll; the background slides the
/// other way.
pub fn wire_parallax(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let shapes: Vec<web::HtmlElement> = dom::query_all(document, HERO_SHAPES)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let background = dom::query_html(document, HERO_BACKGROUND);
    if shapes.is_empty() && background.is_none() {
        return;
    }
    dom::add_passive_listener(&window, "scroll", move || {
        let scrolled = dom::scroll_y();
        for (i, shape) in shapes.iter().enumerate() {
            dom::set_style(shape, "transform", &shape_parallax(scrolled, i).transform_css());
        }
        if let Some(bg) = &background {
            let offset = background_parallax(scrolled);
            dom::set_style(bg, "transform", &format!("translateY({:.1}px)", offset));
        }
    });
}
