use crate::constants::*;
use crate::dom;
use folio_core::constants::SCROLL_THROTTLE_MS;
use folio_core::nav::{anchor_scroll_top, current_section, MenuState, NavFlags};
use folio_core::timing::{Clock, Throttle};
use folio_core::InstantClock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mobile menu: the toggle button, the link list it reveals and the body
/// class that freezes the page underneath.
struct Menu {
    state: MenuState,
    toggle: Option<web::Element>,
    links: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl Menu {
    fn locate(document: &web::Document) -> Self {
        Self {
            state: MenuState::default(),
            toggle: dom::query(document, MENU_TOGGLE),
            links: dom::query(document, NAV_LINKS),
            body: document.body(),
        }
    }

    fn render(&self) {
        let open = self.state.is_open();
        if let Some(toggle) = &self.toggle {
            dom::toggle_class(toggle, ACTIVE_CLASS, open);
        }
        if let Some(links) = &self.links {
            dom::toggle_class(links, NAV_ACTIVE_CLASS, open);
        }
        if let Some(body) = &self.body {
            dom::toggle_class(body, MENU_OPEN_CLASS, open);
        }
    }

    fn toggle(&mut self) {
        self.state.toggle();
        self.render();
    }

    fn close(&mut self) {
        if self.state.close() {
            self.render();
        }
    }
}

pub fn wire_nav(document: &web::Document, clock: InstantClock) {
    let menu = Rc::new(RefCell::new(Menu::locate(document)));
    wire_scroll_chrome(document, clock);
    wire_back_to_top(document);
    wire_menu(document, &menu);
    wire_anchor_links(document, &menu);
    wire_active_link(document);
}

fn wire_scroll_chrome(document: &web::Document, clock: InstantClock) {
    let Some(window) = web::window() else {
        return;
    };
    let nav = dom::query(document, NAV);
    let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);
    let apply = move |flags: NavFlags| {
        if let Some(nav) = &nav {
            dom::toggle_class(nav, NAV_SCROLLED_CLASS, flags.scrolled);
        }
        if let Some(btn) = &back_to_top {
            dom::toggle_class(btn, VISIBLE_CLASS, flags.back_to_top);
        }
    };
    apply(NavFlags::at(dom::scroll_y()));

    let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
    let mut last = NavFlags::at(dom::scroll_y());
    dom::add_passive_listener(&window, "scroll", move || {
        let flags = NavFlags::at(dom::scroll_y());
        // Crossing a threshold is applied at once; the throttle only
        // limits redundant writes.
        if flags == last && !throttle.try_fire(clock.now_ms()) {
            return;
        }
        last = flags;
        apply(flags);
    });
}

fn wire_back_to_top(document: &web::Document) {
    dom::add_click_listener(document, BACK_TO_TOP_ID, || dom::smooth_scroll_to(0.0));
}

fn wire_menu(document: &web::Document, menu: &Rc<RefCell<Menu>>) {
    let Some(toggle) = menu.borrow().toggle.clone() else {
        return;
    };
    let menu_toggle = menu.clone();
    dom::add_listener(&toggle, "click", move |_ev: web::Event| {
        menu_toggle.borrow_mut().toggle();
    });

    let menu_outside = menu.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let target = ev.target();
        let inside = dom::closest(target.clone(), NAV_LINKS).is_some()
            || dom::closest(target, MENU_TOGGLE).is_some();
        if !inside {
            menu_outside.borrow_mut().close();
        }
    });
}

fn wire_anchor_links(document: &web::Document, menu: &Rc<RefCell<Menu>>) {
    for anchor in dom::query_all(document, IN_PAGE_ANCHORS) {
        let menu = menu.clone();
        let doc = document.clone();
        let this = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            menu.borrow_mut().close();
            let Some(href) = this.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector and has no target.
            let Some(section) = dom::query_html(&doc, &href) else {
                return;
            };
            dom::smooth_scroll_to(anchor_scroll_top(section.offset_top() as f64));
        });
    }
}

fn wire_active_link(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let links = dom::query_all(document, NAV_SECTION_LINKS);
    let sections: Vec<web::HtmlElement> = dom::query_all(document, PAGE_SECTIONS)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if links.is_empty() || sections.is_empty() {
        return;
    }

    let mut last: Option<String> = None;
    let mut highlight = move || {
        let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
        let tops: Vec<(&str, f64)> = ids
            .iter()
            .zip(&sections)
            .map(|(id, s)| (id.as_str(), s.offset_top() as f64))
            .collect();
        let current = current_section(dom::scroll_y(), &tops).map(str::to_string);
        if current == last {
            return;
        }
        let wanted = current.as_deref().map(|id| format!("#{}", id));
        for link in &links {
            let on = wanted.is_some() && link.get_attribute("href") == wanted;
            dom::toggle_class(link, ACTIVE_CLASS, on);
        }
        last = current;
    };
    highlight();
    dom::add_passive_listener(&window, "scroll", highlight);
}
