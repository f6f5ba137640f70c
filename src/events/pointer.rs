use crate::constants::INTERACTIVE;
use crate::cursor::CursorApp;
use crate::dom;
use folio_core::timing::Clock;
use folio_core::{InstantClock, InteractiveKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub cursor: Rc<RefCell<CursorApp>>,
    pub hovered: Rc<RefCell<Option<web::Element>>>,
    pub clock: InstantClock,
}

pub fn wire_pointer_handlers(document: &web::Document, w: PointerWiring) {
    if !w.cursor.borrow().is_active() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    wire_mousemove(&window, &w);
    wire_hover(document, &w);
    wire_press(&window, &w);
    wire_scroll_and_resize(&window, &w);
    wire_click_away(document, &w);
}

fn wire_mousemove(window: &web::Window, w: &PointerWiring) {
    let w = w.clone();
    dom::add_listener(window, "mousemove", move |ev: web::MouseEvent| {
        w.cursor
            .borrow_mut()
            .move_to(ev.client_x() as f32, ev.client_y() as f32);
    });
}

// Delegated hover tracking: one listener pair for every interactive element,
// including cards rendered after startup.
fn wire_hover(document: &web::Document, w: &PointerWiring) {
    let over = w.clone();
    dom::add_listener(document, "mouseover", move |ev: web::MouseEvent| {
        let now = over.clock.now_ms();
        let next = dom::closest(ev.target(), INTERACTIVE);
        let mut hovered = over.hovered.borrow_mut();
        if *hovered == next {
            return;
        }
        let mut cursor = over.cursor.borrow_mut();
        cursor.engine.on_pointer_enter_window();
        match &next {
            Some(el) => {
                let kind = InteractiveKind::from_class_list(&el.class_name());
                cursor.engine.on_enter_interactive(kind, now);
            }
            None => cursor.engine.on_leave_interactive(now),
        }
        *hovered = next;
    });

    let out = w.clone();
    dom::add_listener(document, "mouseout", move |ev: web::MouseEvent| {
        if ev.related_target().is_some() {
            return;
        }
        let now = out.clock.now_ms();
        let mut cursor = out.cursor.borrow_mut();
        if out.hovered.borrow_mut().take().is_some() {
            cursor.engine.on_leave_interactive(now);
        }
        cursor.engine.on_pointer_leave_window();
    });
}

fn wire_press(window: &web::Window, w: &PointerWiring) {
    let down = w.clone();
    dom::add_listener(window, "mousedown", move |_ev: web::MouseEvent| {
        let now = down.clock.now_ms();
        down.cursor.borrow_mut().engine.on_press_start(now);
    });
    let up = w.clone();
    dom::add_listener(window, "mouseup", move |_ev: web::MouseEvent| {
        let now = up.clock.now_ms();
        up.cursor.borrow_mut().engine.on_press_end(now);
    });
}

fn wire_scroll_and_resize(window: &web::Window, w: &PointerWiring) {
    let scroll = w.clone();
    dom::add_passive_listener(window, "scroll", move || {
        let now = scroll.clock.now_ms();
        scroll.cursor.borrow_mut().engine.on_scroll_activity(now);
    });
    let resize = w.clone();
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let (vw, vh) = dom::viewport_size();
        resize
            .cursor
            .borrow_mut()
            .engine
            .on_viewport_resize(vw as f32, vh as f32);
    });
}

fn wire_click_away(document: &web::Document, w: &PointerWiring) {
    let w = w.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let on_interactive = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.closest(INTERACTIVE).ok().flatten().is_some())
            .unwrap_or(false);
        if !on_interactive {
            let now = w.clock.now_ms();
            w.cursor.borrow_mut().engine.on_click_away(now);
        }
    });
}
