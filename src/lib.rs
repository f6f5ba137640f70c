#![cfg(target_arch = "wasm32")]
use folio_core::{Catalog, InstantClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod cursor;
mod dom;
mod events;
mod frame;
mod gallery;
mod hero;
mod intro;
mod markup;
mod nav;
mod reveal;
mod theme;
mod visibility;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let clock = InstantClock::new();

    // Page chrome first so the stored theme lands before anything animates.
    theme::wire_theme(&document);
    nav::wire_nav(&document, clock);

    let catalog = Catalog::from_json(CATALOG_JSON)
        .map_err(|e| anyhow::anyhow!("bad gallery catalog: {}", e))?;
    let gallery = gallery::GalleryApp::mount(&document, catalog, clock);
    if let Some(g) = gallery.as_ref().filter(|g| g.borrow().has_modal()) {
        events::wire_modal_keydown(g.clone());
    }

    let hero = hero::HeroApp::mount(&document, clock);
    let typer = intro::TitleTyper::mount(&document, clock);
    intro::wire_parallax(&document);

    let cursor = cursor::CursorApp::mount(&document);
    if let Some(c) = &cursor {
        events::wire_pointer_handlers(
            &document,
            events::PointerWiring {
                cursor: c.clone(),
                hovered: Rc::new(RefCell::new(None)),
                clock,
            },
        );
    }

    let counters = Rc::new(RefCell::new(reveal::Counters::default()));
    reveal::wire_reveal(&document, &counters, clock);
    contact::wire_contact_form(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock,
        cursor,
        hero,
        typer,
        gallery,
        counters,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
