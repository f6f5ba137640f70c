use crate::cursor::CursorApp;
use crate::gallery::GalleryApp;
use crate::hero::HeroApp;
use crate::intro::TitleTyper;
use crate::reveal::Counters;
use folio_core::timing::Clock;
use folio_core::InstantClock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything that advances once per animation frame. Components that
/// found no markup on the page are simply absent.
pub struct FrameContext {
    pub clock: InstantClock,
    pub cursor: Option<Rc<RefCell<CursorApp>>>,
    pub hero: Option<Rc<RefCell<HeroApp>>>,
    pub typer: Option<TitleTyper>,
    pub gallery: Option<Rc<RefCell<GalleryApp>>>,
    pub counters: Rc<RefCell<Counters>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        if let Some(cursor) = &self.cursor {
            cursor.borrow_mut().frame(now);
        }
        if let Some(hero) = &self.hero {
            hero.borrow_mut().frame(now);
        }
        if self.typer.as_mut().is_some_and(|t| !t.frame(now)) {
            self.typer = None;
        }
        if let Some(gallery) = &self.gallery {
            gallery.borrow_mut().frame(now);
        }
        self.counters.borrow_mut().frame(now);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
