use folio_core::visibility::{ObserveMode, VisibilityChange, VisibilityTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct ObserveOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px",
            threshold: 0.0,
        }
    }
}

/// Watch `elements` with one IntersectionObserver.
///
/// `on_change` gets the edge, the element, and its position within the
/// current notification batch (used for staggered reveals). `Once` targets
/// are unobserved after their first entry.
pub fn observe(
    elements: Vec<web::Element>,
    mode: ObserveMode,
    opts: ObserveOptions,
    mut on_change: impl FnMut(VisibilityChange, &web::Element, usize) + 'static,
) -> Option<web::IntersectionObserver> {
    if elements.is_empty() {
        return None;
    }
    let mut trackers: Vec<(web::Element, VisibilityTracker)> = elements
        .iter()
        .map(|el| (el.clone(), VisibilityTracker::new(mode)))
        .collect();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut batch_index = 0;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some((_, tracker)) = trackers.iter_mut().find(|(el, _)| *el == target)
                else {
                    continue;
                };
                let Some(change) = tracker.update(entry.is_intersecting()) else {
                    continue;
                };
                if tracker.is_done() {
                    observer.unobserve(&target);
                }
                on_change(change, &target, batch_index);
                if change == VisibilityChange::Entered {
                    batch_index += 1;
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_root_margin(opts.root_margin);
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[visibility] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();
    for el in &elements {
        observer.observe(el);
    }
    Some(observer)
}
