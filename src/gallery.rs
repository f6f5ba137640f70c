use crate::constants::*;
use crate::dom;
use crate::markup;
use folio_core::constants::{
    BACK_OUT_OVERSHOOT, CARD_ENTER_MS, CARD_ENTER_STAGGER_MS, CARD_EXIT_MS, CARD_EXIT_STAGGER_MS,
    CARD_TILT_MS, CARD_TILT_RESET_MS, MODAL_FADE_MS, TILT_ELASTIC_AMPLITUDE, TILT_ELASTIC_PERIOD,
};
use folio_core::easing::Easing;
use folio_core::timing::Clock;
use folio_core::tween::{Style, StaggerFrom, StyleProps, TweenOptions, TweenScheduler};
use folio_core::{
    card_tilt, Catalog, Direction, GalleryController, GalleryEffect, ImageLoader, InstantClock,
    ItemId,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CardTween {
    Exit(u64),
}

/// Starts full-size fetches with detached `<img>` elements; the browser
/// cache then serves the modal's own `src` swap.
pub struct DomImageLoader {
    app: Weak<RefCell<GalleryApp>>,
}

impl DomImageLoader {
    fn report(app: &Weak<RefCell<GalleryApp>>, id: ItemId, ok: bool) {
        if let Some(app) = app.upgrade() {
            app.borrow_mut().on_image_settled(id, ok);
        }
    }
}

impl ImageLoader for DomImageLoader {
    type Handle = Option<web::HtmlImageElement>;

    fn load(&mut self, id: ItemId, url: &str) -> Self::Handle {
        let Ok(img) = web::HtmlImageElement::new() else {
            log::warn!("[gallery] could not create image element for {}", url);
            let app = self.app.clone();
            dom::set_timeout(0, move || Self::report(&app, id, false));
            return None;
        };

        let app_ok = self.app.clone();
        let onload = Closure::once(move || Self::report(&app_ok, id, true));
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let app_err = self.app.clone();
        let onerror = Closure::once(move || Self::report(&app_err, id, false));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        img.set_src(url);
        Some(img)
    }
}

struct ModalDom {
    root: web::HtmlElement,
    image: Option<web::HtmlImageElement>,
    title: Option<web::Element>,
    description: Option<web::Element>,
    category: Option<web::Element>,
    tech: Option<web::Element>,
    live: Option<web::HtmlElement>,
}

impl ModalDom {
    fn locate(document: &web::Document) -> Option<Self> {
        let root = dom::query_html(document, MODAL)?;
        Some(Self {
            image: dom::query_in(&root, MODAL_IMAGE)
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok()),
            title: dom::query_in(&root, MODAL_TITLE),
            description: dom::query_in(&root, MODAL_DESCRIPTION),
            category: dom::query_in(&root, MODAL_CATEGORY),
            tech: dom::query_in(&root, MODAL_TECH),
            live: dom::query_in(&root, MODAL_LIVE)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            root,
        })
    }

    fn fading_parts(&self) -> Vec<web::HtmlElement> {
        let image = self
            .image
            .as_ref()
            .map(|i| i.clone().unchecked_into::<web::HtmlElement>());
        let text = [&self.title, &self.description]
            .into_iter()
            .flatten()
            .filter_map(|el| el.clone().dyn_into::<web::HtmlElement>().ok());
        image.into_iter().chain(text).collect()
    }
}

pub struct GalleryApp {
    document: web::Document,
    grid: web::Element,
    modal: Option<ModalDom>,
    controller: GalleryController<Option<web::HtmlImageElement>>,
    loader: DomImageLoader,
    tweens: TweenScheduler<web::HtmlElement, CardTween>,
    cards: Vec<web::HtmlElement>,
    effects: Vec<GalleryEffect>,
    styles: Vec<(web::HtmlElement, Style)>,
    finished: Vec<CardTween>,
    clock: InstantClock,
}

impl GalleryApp {
    pub fn mount(
        document: &web::Document,
        catalog: Catalog,
        clock: InstantClock,
    ) -> Option<Rc<RefCell<Self>>> {
        let Some(grid) = dom::query(document, GALLERY_GRID) else {
            log::info!("[gallery] no {} on page, skipping", GALLERY_GRID);
            return None;
        };
        let modal = ModalDom::locate(document);
        let mut controller = GalleryController::new(catalog);
        if modal.is_none() {
            log::warn!("[gallery] {} missing, cards will not open", MODAL);
            controller = controller.without_modal();
        }
        log::info!("[gallery] {} items", controller.catalog().len());
        let app = Rc::new_cyclic(|weak| {
            RefCell::new(Self {
                document: document.clone(),
                grid,
                modal,
                controller,
                loader: DomImageLoader { app: weak.clone() },
                tweens: TweenScheduler::new(),
                cards: Vec::new(),
                effects: Vec::new(),
                styles: Vec::new(),
                finished: Vec::new(),
                clock,
            })
        });
        wire_gallery_handlers(&app, document);
        app.borrow_mut().set_filter(folio_core::constants::ALL_FILTER);
        Some(app)
    }

    pub fn has_modal(&self) -> bool {
        self.controller.has_modal()
    }

    pub fn set_filter(&mut self, category: &str) {
        self.controller
            .set_filter(category, &mut self.loader, &mut self.effects);
        self.apply_effects();
    }

    pub fn open(&mut self, id: ItemId) {
        let now = self.clock.now_ms();
        self.controller
            .open_modal(id, now, &mut self.loader, &mut self.effects);
        self.apply_effects();
    }

    pub fn navigate(&mut self, direction: Direction) {
        let now = self.clock.now_ms();
        self.controller
            .navigate_modal(direction, now, &mut self.loader, &mut self.effects);
        self.apply_effects();
    }

    pub fn close(&mut self) {
        self.controller.close_modal(&mut self.effects);
        self.apply_effects();
    }

    /// Returns true when the key was consumed by the open modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let handled = self
            .controller
            .handle_key(key, now, &mut self.loader, &mut self.effects);
        self.apply_effects();
        handled
    }

    fn on_image_settled(&mut self, id: ItemId, ok: bool) {
        self.controller.image_settled(id, ok, &mut self.effects);
        self.apply_effects();
    }

    /// Lean `card` toward the pointer at client coordinates.
    pub fn tilt_card(&mut self, card: &web::HtmlElement, client_x: f64, client_y: f64) {
        if !self.cards.contains(card) {
            return;
        }
        let rect = card.get_bounding_client_rect();
        let local = Vec2::new(
            (client_x - rect.left()) as f32,
            (client_y - rect.top()) as f32,
        );
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        self.retilt(card, card_tilt(local, size), CARD_TILT_MS, Easing::QuadOut);
    }

    /// Spring a card back to flat once the pointer leaves it.
    pub fn release_card(&mut self, card: &web::HtmlElement) {
        if !self.cards.contains(card) {
            return;
        }
        let elastic = Easing::ElasticOut {
            amplitude: TILT_ELASTIC_AMPLITUDE,
            period: TILT_ELASTIC_PERIOD,
        };
        let flat = StyleProps::default().tilt(0.0, 0.0);
        self.retilt(card, flat, CARD_TILT_RESET_MS, elastic);
    }

    fn retilt(&mut self, card: &web::HtmlElement, props: StyleProps, ms: f64, easing: Easing) {
        let now = self.clock.now_ms();
        self.tweens.kill_props(card, &props);
        self.tweens.animate(
            std::slice::from_ref(card),
            props,
            TweenOptions::new(ms, easing),
            None,
            now,
        );
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.tweens
            .tick(now_ms, &mut self.styles, &mut self.finished);
        self.write_styles();
        let finished = std::mem::take(&mut self.finished);
        for tag in &finished {
            match *tag {
                CardTween::Exit(generation) => {
                    self.controller
                        .exit_finished(generation, &mut self.loader, &mut self.effects);
                }
            }
        }
        self.finished = finished;
        self.finished.clear();

        self.controller.tick(now_ms, &mut self.effects);
        self.apply_effects();
    }

    fn write_styles(&mut self) {
        for (el, style) in self.styles.drain(..) {
            dom::set_style(&el, "opacity", &format!("{:.3}", style.opacity));
            dom::set_style(&el, "transform", &style.transform_css());
        }
    }

    fn apply_effects(&mut self) {
        if self.effects.is_empty() {
            return;
        }
        let effects = std::mem::take(&mut self.effects);
        for effect in &effects {
            self.apply(effect);
        }
        self.effects = effects;
        self.effects.clear();
        // Starting poses must land before the browser paints new markup.
        self.tweens.flush(&mut self.styles);
        self.write_styles();
    }

    fn apply(&mut self, effect: &GalleryEffect) {
        let now = self.clock.now_ms();
        match effect {
            GalleryEffect::ExitCards { generation } => {
                for card in &self.cards {
                    self.tweens.kill(card);
                }
                self.tweens.animate(
                    &self.cards,
                    StyleProps::default().opacity(0.0).y(-50.0).scale(0.8),
                    TweenOptions::new(CARD_EXIT_MS, Easing::QuadOut)
                        .stagger(CARD_EXIT_STAGGER_MS, StaggerFrom::Start),
                    Some(CardTween::Exit(*generation)),
                    now,
                );
            }
            GalleryEffect::RenderCards { indices, .. } => {
                let items = indices
                    .iter()
                    .filter_map(|&i| self.controller.catalog().get(i));
                let html = markup::cards_html(items);
                self.replace_cards(&html);
                for card in &self.cards {
                    self.tweens.set(
                        card,
                        StyleProps::default()
                            .opacity(0.0)
                            .y(100.0)
                            .scale(0.8)
                            .rotate_y(15.0),
                    );
                }
                self.tweens.animate(
                    &self.cards,
                    StyleProps::default()
                        .opacity(1.0)
                        .y(0.0)
                        .scale(1.0)
                        .rotate_y(0.0),
                    TweenOptions::new(CARD_ENTER_MS, Easing::BackOut(BACK_OUT_OVERSHOOT))
                        .stagger(CARD_ENTER_STAGGER_MS, StaggerFrom::Center),
                    None,
                    now,
                );
            }
            GalleryEffect::RenderEmpty { .. } => self.replace_cards(markup::empty_html()),
            GalleryEffect::ShowModal { index, transition } => {
                self.show_modal(*index, *transition, now);
            }
            GalleryEffect::SwapFullImage { index } => {
                let Some(item) = self.controller.catalog().get(*index) else {
                    return;
                };
                if let Some(img) = self.modal.as_ref().and_then(|m| m.image.as_ref()) {
                    img.set_src(&item.image);
                    _ = img.class_list().remove_1(LOADING_CLASS);
                }
            }
            GalleryEffect::ClearLoading { .. } => {
                if let Some(img) = self.modal.as_ref().and_then(|m| m.image.as_ref()) {
                    _ = img.class_list().remove_1(LOADING_CLASS);
                }
            }
            GalleryEffect::HideModal => self.hide_modal(),
        }
    }

    fn replace_cards(&mut self, html: &str) {
        for card in self.cards.drain(..) {
            self.tweens.forget(&card);
        }
        self.grid.set_inner_html(html);
        self.cards = dom::query_all_in(&self.grid, GALLERY_CARD)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
    }

    fn show_modal(&mut self, index: usize, transition: Option<Direction>, now: f64) {
        let Some(modal) = &self.modal else {
            return;
        };
        let Some(item) = self.controller.catalog().get(index) else {
            return;
        };

        if let Some(img) = &modal.image {
            img.set_src(&item.thumbnail);
            img.set_alt(&item.title);
            _ = img.class_list().add_1(LOADING_CLASS);
        }
        if let Some(el) = &modal.title {
            el.set_text_content(Some(&item.title));
        }
        if let Some(el) = &modal.description {
            el.set_text_content(Some(&item.description));
        }
        if let Some(el) = &modal.category {
            el.set_text_content(Some(&format!(
                "Category: {}",
                markup::category_label(&item.category)
            )));
        }
        if let Some(el) = &modal.tech {
            el.set_inner_html(&markup::tech_tags_html(&item.technologies));
        }
        if let Some(link) = &modal.live {
            match &item.live_demo_url {
                Some(url) => {
                    _ = link.set_attribute("href", url);
                    dom::set_style(link, "display", "");
                }
                None => dom::set_style(link, "display", "none"),
            }
        }

        match transition {
            None => {
                dom::set_style(&modal.root, "display", "flex");
                let root = modal.root.clone();
                let app = self.loader.app.clone();
                dom::set_timeout(10, move || {
                    // Closed again before the fade-in started.
                    let still_open = app
                        .upgrade()
                        .and_then(|app| app.try_borrow().ok().map(|a| a.controller.is_modal_open()))
                        .unwrap_or(false);
                    if still_open {
                        _ = root.class_list().add_1(ACTIVE_CLASS);
                    }
                });
                dom::lock_page_scroll(&self.document, true);
            }
            Some(direction) => {
                let offset = match direction {
                    Direction::Next => MODAL_FADE_OFFSET_PX,
                    Direction::Prev => -MODAL_FADE_OFFSET_PX,
                };
                let parts = modal.fading_parts();
                for part in &parts {
                    self.tweens.kill(part);
                    self.tweens
                        .set(part, StyleProps::default().opacity(0.0).x(offset));
                }
                self.tweens.animate(
                    &parts,
                    StyleProps::default().opacity(1.0).x(0.0),
                    TweenOptions::new(MODAL_FADE_MS, Easing::CubicOut),
                    None,
                    now,
                );
            }
        }
    }

    fn hide_modal(&mut self) {
        let Some(modal) = &self.modal else {
            return;
        };
        _ = modal.root.class_list().remove_1(ACTIVE_CLASS);
        let root = modal.root.clone();
        dom::set_timeout(MODAL_FADE_MS as i32, move || {
            // Reopened during the fade.
            if !root.class_list().contains(ACTIVE_CLASS) {
                dom::set_style(&root, "display", "none");
            }
        });
        dom::lock_page_scroll(&self.document, false);
    }

    fn mark_active_filter(&self, button: &web::Element) {
        let group = match button.parent_element() {
            Some(parent) => dom::query_all_in(&parent, FILTER_BUTTON),
            None => dom::query_all(&self.document, FILTER_BUTTON),
        };
        for b in group {
            dom::toggle_class(&b, ACTIVE_CLASS, &b == button);
        }
    }
}

fn hovered_card(target: Option<web::EventTarget>) -> Option<web::HtmlElement> {
    dom::closest(target, GALLERY_CARD).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn wire_gallery_handlers(app: &Rc<RefCell<GalleryApp>>, document: &web::Document) {
    for button in dom::query_all(document, FILTER_BUTTON) {
        let app = app.clone();
        let this = button.clone();
        dom::add_listener(&button, "click", move |_ev: web::Event| {
            let category = this
                .get_attribute(FILTER_ATTR)
                .unwrap_or_else(|| folio_core::constants::ALL_FILTER.to_string());
            let mut app = app.borrow_mut();
            app.mark_active_filter(&this);
            app.set_filter(&category);
        });
    }

    let grid = app.borrow().grid.clone();
    let app_grid = app.clone();
    dom::add_listener(&grid, "click", move |ev: web::MouseEvent| {
        let Some(card) = dom::closest(ev.target(), GALLERY_CARD) else {
            return;
        };
        let Some(id) = card
            .get_attribute(CARD_ID_ATTR)
            .and_then(|v| v.parse::<ItemId>().ok())
        else {
            log::warn!("[gallery] card without a usable {}", CARD_ID_ATTR);
            return;
        };
        app_grid.borrow_mut().open(id);
    });

    let app_tilt = app.clone();
    dom::add_listener(&grid, "mousemove", move |ev: web::MouseEvent| {
        let Some(card) = hovered_card(ev.target()) else {
            return;
        };
        app_tilt
            .borrow_mut()
            .tilt_card(&card, ev.client_x() as f64, ev.client_y() as f64);
    });

    // mouseleave doesn't bubble; a mouseout whose destination is outside
    // the card means the pointer left it.
    let app_release = app.clone();
    dom::add_listener(&grid, "mouseout", move |ev: web::MouseEvent| {
        let Some(card) = hovered_card(ev.target()) else {
            return;
        };
        let still_inside = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web::Node>().ok())
            .map(|n| card.contains(Some(&n)))
            .unwrap_or(false);
        if !still_inside {
            app_release.borrow_mut().release_card(&card);
        }
    });

    let modal_root = app.borrow().modal.as_ref().map(|m| m.root.clone());
    if let Some(root) = modal_root {
        let app_modal = app.clone();
        let backdrop = root.clone();
        dom::add_listener(&root, "click", move |ev: web::MouseEvent| {
            let target = ev.target();
            let on_backdrop = target
                .as_ref()
                .map(|t| t == backdrop.unchecked_ref::<web::EventTarget>())
                .unwrap_or(false);
            let mut app = app_modal.borrow_mut();
            if on_backdrop || dom::closest(target.clone(), MODAL_CLOSE).is_some() {
                app.close();
            } else if dom::closest(target.clone(), MODAL_PREV).is_some() {
                app.navigate(Direction::Prev);
            } else if dom::closest(target, MODAL_NEXT).is_some() {
                app.navigate(Direction::Next);
            }
        });
    }
}
