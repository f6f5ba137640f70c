use crate::gallery::GalleryApp;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keys the open modal listens to.
#[inline]
pub fn is_modal_key(key: &str) -> bool {
    matches!(key, "Escape" | "ArrowLeft" | "ArrowRight")
}

pub fn handle_modal_keydown(ev: &web::KeyboardEvent, gallery: &Rc<RefCell<GalleryApp>>) {
    let key = ev.key();
    if !is_modal_key(&key) {
        return;
    }
    if gallery.borrow_mut().on_key(&key) {
        log::debug!("[keys] modal {}", key);
        ev.prevent_default();
    }
}

pub fn wire_modal_keydown(gallery: Rc<RefCell<GalleryApp>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_modal_keydown(&ev, &gallery);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(
            "keydown",
            wasm_bindgen::JsCast::unchecked_ref(closure.as_ref()),
        );
        closure.forget();
    }
}
