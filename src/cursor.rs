use crate::constants::*;
use crate::dom;
use folio_core::{FollowerFrame, PointerEngine, VisualPreset};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Paints the two follower elements from the pointer engine.
pub struct CursorApp {
    pub engine: PointerEngine,
    dot: web::HtmlElement,
    outline: web::HtmlElement,
    painted: Option<VisualPreset>,
    dot_scale: f32,
    shown: Option<bool>,
}

impl CursorApp {
    pub fn mount(document: &web::Document) -> Option<Rc<RefCell<Self>>> {
        let dot = dom::query_html(document, CURSOR_DOT)?;
        let outline = dom::query_html(document, CURSOR_OUTLINE)?;

        let engine = if dom::is_touch_device() {
            dom::set_style(&dot, "display", "none");
            dom::set_style(&outline, "display", "none");
            if let Some(body) = document.body() {
                dom::set_style(&body, "cursor", "auto");
            }
            log::info!("[cursor] touch device, followers disabled");
            PointerEngine::disabled()
        } else {
            let mut engine = PointerEngine::default();
            let (w, h) = dom::viewport_size();
            engine.center_in(w as f32, h as f32);
            engine
        };

        Some(Rc::new(RefCell::new(Self {
            engine,
            dot,
            outline,
            painted: None,
            dot_scale: 1.0,
            shown: None,
        })))
    }

    pub fn is_active(&self) -> bool {
        !self.engine.is_disabled()
    }

    /// The dot tracks the pointer without waiting for the next frame.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if let Some(at) = self.engine.on_pointer_move(x, y) {
            dom::set_style(&self.dot, "transform", &place(at.x, at.y, self.dot_scale));
        }
    }

    pub fn frame(&mut self, now_ms: f64) {
        let Some(f) = self.engine.tick(now_ms) else {
            return;
        };
        self.paint(&f);
    }

    fn paint(&mut self, f: &FollowerFrame) {
        self.dot_scale = f.dot_scale;
        dom::set_style(&self.dot, "transform", &place(f.dot.x, f.dot.y, f.dot_scale));
        dom::set_style(
            &self.outline,
            "transform",
            &place(f.outline.x, f.outline.y, f.outline_scale),
        );

        if self.shown != Some(f.visible) {
            let opacity = if f.visible { "1" } else { "0" };
            dom::set_style(&self.dot, "opacity", opacity);
            dom::set_style(&self.outline, "opacity", opacity);
            self.shown = Some(f.visible);
        }

        if self.painted != Some(f.preset) {
            let p = f.preset;
            dom::set_style(&self.dot, "background-color", p.dot_color.unwrap_or(""));
            dom::set_style(&self.outline, "border-color", p.outline_color.unwrap_or(""));
            let size = format!("{}px", p.outline_px);
            dom::set_style(&self.outline, "width", &size);
            dom::set_style(&self.outline, "height", &size);
            self.painted = Some(p);
        }
    }
}

#[inline]
fn place(x: f32, y: f32, scale: f32) -> String {
    format!(
        "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({:.3})",
        x, y, scale
    )
}
