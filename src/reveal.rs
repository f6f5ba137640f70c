use crate::constants::*;
use crate::dom;
use crate::visibility::{self, ObserveOptions};
use folio_core::constants::REVEAL_STAGGER_MS;
use folio_core::counter::{parse_stat, Counter};
use folio_core::timing::Clock;
use folio_core::visibility::{reveal_delay_ms, ObserveMode, VisibilityChange};
use folio_core::InstantClock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stat counters started by the observer and sampled once per frame.
#[derive(Default)]
pub struct Counters {
    running: Vec<(web::Element, Counter)>,
}

impl Counters {
    pub fn start(&mut self, el: web::Element, counter: Counter) {
        self.running.push((el, counter));
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.running.retain_mut(|(el, counter)| {
            if let Some(label) = counter.sample(now_ms) {
                el.set_text_content(Some(&label));
            }
            !counter.is_done()
        });
    }
}

pub fn wire_reveal(
    document: &web::Document,
    counters: &Rc<RefCell<Counters>>,
    clock: InstantClock,
) {
    wire_fade_in(document);
    wire_stats(document, counters, clock);
    wire_lazy_sections(document);
}

fn wire_fade_in(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    for el in &targets {
        _ = el.class_list().add_1(FADE_IN_CLASS);
    }
    visibility::observe(
        targets,
        ObserveMode::Once,
        ObserveOptions {
            root_margin: REVEAL_ROOT_MARGIN,
            threshold: REVEAL_THRESHOLD,
        },
        |change, el, batch_index| {
            if change != VisibilityChange::Entered {
                return;
            }
            let el = el.clone();
            let delay = reveal_delay_ms(batch_index, REVEAL_STAGGER_MS) as i32;
            dom::set_timeout(delay, move || {
                _ = el.class_list().add_1(VISIBLE_CLASS);
            });
        },
    );
}

fn wire_stats(document: &web::Document, counters: &Rc<RefCell<Counters>>, clock: InstantClock) {
    let Some(block) = dom::query(document, STATS_BLOCK) else {
        return;
    };
    let counters = counters.clone();
    let doc = document.clone();
    visibility::observe(
        vec![block],
        ObserveMode::Once,
        ObserveOptions {
            threshold: STATS_THRESHOLD,
            ..ObserveOptions::default()
        },
        move |change, _el, _| {
            if change != VisibilityChange::Entered {
                return;
            }
            let now = clock.now_ms();
            let mut counters = counters.borrow_mut();
            for stat in dom::query_all(&doc, STAT_NUMBER) {
                let text = stat.text_content().unwrap_or_default();
                if let Some(target) = parse_stat(&text) {
                    counters.start(stat, Counter::new(target, now));
                }
            }
        },
    );
}

// Sections below the fold get their hover effects wired once they come
// within 200px of the viewport.
fn wire_lazy_sections(document: &web::Document) {
    let sections = dom::query_all(document, LAZY_SECTIONS);
    visibility::observe(
        sections,
        ObserveMode::Once,
        ObserveOptions {
            root_margin: LAZY_ROOT_MARGIN,
            threshold: LAZY_THRESHOLD,
        },
        |change, section, _| {
            if change == VisibilityChange::Entered && section.id() == EXPERIENCE_SECTION_ID {
                enhance_experience(section);
            }
        },
    );
}

fn enhance_experience(section: &web::Element) {
    if section.has_attribute("data-initialized") {
        return;
    }
    _ = section.set_attribute("data-initialized", "true");
    let items = dom::query_all_in(section, TIMELINE_ITEM);
    log::debug!("[reveal] experience: {} timeline items", items.len());
    for item in items {
        let Ok(item) = item.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        dom::set_style(&item, "transition", "transform 0.3s ease, box-shadow 0.3s ease");
        let enter = item.clone();
        dom::add_listener(&item, "mouseenter", move |_ev: web::Event| {
            dom::set_style(&enter, "transform", "scale(1.03)");
            dom::set_style(&enter, "box-shadow", "0 10px 30px rgba(0, 0, 0, 0.15)");
        });
        let leave = item.clone();
        dom::add_listener(&item, "mouseleave", move |_ev: web::Event| {
            dom::set_style(&leave, "transform", "");
            dom::set_style(&leave, "box-shadow", "");
        });
    }
}
