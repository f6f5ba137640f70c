use crate::constants::THEME_TOGGLE_ID;
use crate::dom;
use folio_core::theme::{load_theme, toggle_theme, Theme, ThemeStore, DARK_CLASS, THEME_KEY};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage` under a single key. Private browsing may deny storage;
/// reads then come back empty and writes are dropped.
pub struct LocalStorageThemeStore {
    storage: Option<web::Storage>,
}

impl LocalStorageThemeStore {
    pub fn new() -> Self {
        Self {
            storage: web::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn read(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(THEME_KEY).ok().flatten()
    }

    fn write(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(THEME_KEY, value).is_err() {
                log::warn!("[theme] could not persist theme");
            }
        }
    }
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        dom::toggle_class(&body, DARK_CLASS, theme.is_dark());
    }
}

pub fn wire_theme(document: &web::Document) {
    let mut store = LocalStorageThemeStore::new();
    let initial = load_theme(&store);
    apply(document, initial);
    log::info!("[theme] {}", initial.as_str());

    let current = Rc::new(Cell::new(initial));
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = toggle_theme(current.get(), &mut store);
        current.set(next);
        apply(&doc, next);
    });
}
