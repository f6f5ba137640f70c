use crate::constants::*;
use crate::dom;
use crate::visibility;
use folio_core::constants::{HERO_FPS, LINKS_MIN_VIEWPORT_PX, RESIZE_DEBOUNCE_MS};
use folio_core::particles::{particle_count, Attraction, Link, ParticleField};
use folio_core::timing::{Clock, Debounce, FrameLimiter};
use folio_core::visibility::{ObserveMode, VisibilityChange};
use folio_core::InstantClock;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const LINK_RGB: &str = "108, 92, 231";

pub struct HeroApp {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    links: Vec<Link>,
    limiter: FrameLimiter,
    reseed: Debounce,
    rng: SmallRng,
    pointer: Option<Vec2>,
    on_screen: bool,
    dpr: f64,
}

impl HeroApp {
    pub fn mount(document: &web::Document, clock: InstantClock) -> Option<Rc<RefCell<Self>>> {
        let canvas = document
            .get_element_by_id(HERO_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            _ => {
                log::warn!("[hero] 2d context unavailable");
                return None;
            }
        };

        let mut seed = [0u8; 32];
        if getrandom::getrandom(&mut seed).is_err() {
            log::warn!("[hero] no entropy source, using fixed seed");
        }
        let mut hero = Self {
            canvas,
            ctx,
            field: ParticleField::new(Vec2::ZERO, Some(Attraction::default())),
            links: Vec::new(),
            limiter: FrameLimiter::new(HERO_FPS),
            reseed: Debounce::new(RESIZE_DEBOUNCE_MS),
            rng: SmallRng::from_seed(seed),
            pointer: None,
            on_screen: true,
            dpr: 1.0,
        };
        hero.rebuild();
        log::info!("[hero] {} particles", hero.field.particles().len());

        let app = Rc::new(RefCell::new(hero));
        wire_hero_handlers(&app, document, clock);
        Some(app)
    }

    fn rebuild(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        let rect = self.canvas.get_bounding_client_rect();
        self.field
            .resize(Vec2::new(rect.width() as f32, rect.height() as f32));
        let (vw, vh) = dom::viewport_size();
        self.field.seed(particle_count(vw, vh), &mut self.rng);
    }

    pub fn on_resize(&mut self, now_ms: f64) {
        self.reseed.trigger(now_ms);
    }

    pub fn on_pointer(&mut self, client_x: f64, client_y: f64) {
        let rect = self.canvas.get_bounding_client_rect();
        let local = Vec2::new(
            (client_x - rect.left()) as f32,
            (client_y - rect.top()) as f32,
        );
        let inside = local.x >= 0.0
            && local.y >= 0.0
            && local.x <= rect.width() as f32
            && local.y <= rect.height() as f32;
        self.pointer = inside.then_some(local);
    }

    pub fn set_on_screen(&mut self, on_screen: bool) {
        if on_screen && !self.on_screen {
            self.limiter.reset();
        }
        self.on_screen = on_screen;
        log::debug!("[hero] on_screen={}", on_screen);
    }

    pub fn frame(&mut self, now_ms: f64) {
        if self.reseed.poll(now_ms) {
            self.rebuild();
        }
        if !self.on_screen || !self.limiter.ready(now_ms) {
            return;
        }
        self.field.step(self.pointer);
        self.draw();
    }

    #[allow(deprecated)]
    fn draw(&mut self) {
        let bounds = self.field.bounds();
        self.ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

        let (vw, _) = dom::viewport_size();
        if vw >= LINKS_MIN_VIEWPORT_PX {
            self.field.links(&mut self.links);
            let particles = self.field.particles();
            self.ctx.set_line_width(1.0);
            self.ctx.set_global_alpha(1.0);
            for link in &self.links {
                let (a, b) = (particles[link.a].pos, particles[link.b].pos);
                self.ctx.set_stroke_style(&JsValue::from_str(&format!(
                    "rgba({}, {:.3})",
                    LINK_RGB, link.alpha
                )));
                self.ctx.begin_path();
                self.ctx.move_to(a.x as f64, a.y as f64);
                self.ctx.line_to(b.x as f64, b.y as f64);
                self.ctx.stroke();
            }
        }

        for p in self.field.particles() {
            self.ctx.set_global_alpha(p.opacity as f64);
            self.ctx.set_fill_style(&JsValue::from_str(p.color_hex()));
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

fn wire_hero_handlers(app: &Rc<RefCell<HeroApp>>, document: &web::Document, clock: InstantClock) {
    let Some(window) = web::window() else {
        return;
    };

    let app_resize = app.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        app_resize.borrow_mut().on_resize(clock.now_ms());
    });

    let app_move = app.clone();
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        app_move
            .borrow_mut()
            .on_pointer(ev.client_x() as f64, ev.client_y() as f64);
    });

    let app_out = app.clone();
    dom::add_listener(document, "mouseleave", move |_ev: web::Event| {
        app_out.borrow_mut().pointer = None;
    });

    // Pause the simulation while the hero is scrolled away.
    if let Some(section) = document.get_element_by_id(HERO_SECTION_ID) {
        let app_vis = app.clone();
        visibility::observe(
            vec![section],
            ObserveMode::Continuous,
            visibility::ObserveOptions::default(),
            move |change, _el, _batch_index| {
                app_vis
                    .borrow_mut()
                    .set_on_screen(change == VisibilityChange::Entered);
            },
        );
    }
}
