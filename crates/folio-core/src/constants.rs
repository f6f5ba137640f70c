// Shared tuning constants for the cursor, hero particles and gallery.

// Pointer follower
pub const LAG_FACTOR: f32 = 18.0; // larger = longer trail behind the pointer
pub const SCROLL_IDLE_MS: f64 = 200.0; // scrolling flag clears after this much quiet
pub const CLICK_AWAY_RESET_MS: f64 = 100.0;
pub const SCALE_TWEEN_MS: f64 = 200.0;
pub const NORMAL_OUTLINE_PX: f32 = 40.0;

// Hero particles
pub const PARTICLE_CAP: usize = 100;
pub const PARTICLE_AREA_PER: f64 = 8000.0; // viewport px² per particle
pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 5.0;
pub const PARTICLE_MAX_AXIS_SPEED: f32 = 1.5;
pub const PARTICLE_MIN_OPACITY: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_COLORS: [&str; 3] = ["#6c5ce7", "#fd79a8", "#00b894"];
pub const LINK_DISTANCE: f32 = 100.0;
pub const LINK_MAX_ALPHA: f32 = 0.1;
pub const ATTRACTION_RADIUS: f32 = 120.0;
pub const ATTRACTION_STRENGTH: f32 = 0.05;
pub const ATTRACTION_MAX_SPEED: f32 = 3.0;
pub const HERO_FPS: f64 = 30.0;
pub const LINKS_MIN_VIEWPORT_PX: f64 = 768.0;

// Shared timers
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const SCROLL_THROTTLE_MS: f64 = 200.0;

// Gallery
pub const ALL_FILTER: &str = "all";
pub const INITIAL_PRELOAD_COUNT: usize = 3;
pub const CACHED_SWAP_DELAY_MS: f64 = 100.0; // softens the thumbnail → full image swap
pub const CARD_EXIT_MS: f64 = 300.0;
pub const CARD_EXIT_STAGGER_MS: f64 = 50.0;
pub const CARD_ENTER_MS: f64 = 800.0;
pub const CARD_ENTER_STAGGER_MS: f64 = 100.0;
pub const MODAL_FADE_MS: f64 = 300.0;
pub const BACK_OUT_OVERSHOOT: f32 = 1.7;
pub const CARD_TILT_DIVISOR: f32 = 10.0; // px of pointer offset per degree
pub const CARD_TILT_MS: f64 = 400.0;
pub const CARD_TILT_RESET_MS: f64 = 600.0;
pub const TILT_ELASTIC_AMPLITUDE: f32 = 1.0;
pub const TILT_ELASTIC_PERIOD: f32 = 0.5;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Hero title and parallax
pub const TYPE_START_DELAY_MS: f64 = 2000.0;
pub const TYPE_STEP_MS: f64 = 120.0;
pub const TYPE_CARET_LINGER_MS: f64 = 2000.0;
pub const PARALLAX_SHAPE_BASE: f64 = 0.3;
pub const PARALLAX_SHAPE_STEP: f64 = 0.1; // each later shape drifts a bit faster
pub const PARALLAX_SHAPE_SPIN: f64 = 0.1; // degrees per px scrolled
pub const PARALLAX_BACKGROUND_RATE: f64 = -0.5;

// Counters and reveal
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_STEP_MS: f64 = 16.0;
pub const REVEAL_STAGGER_MS: f64 = 100.0;

// Navigation chrome
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 500.0;
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 100.0; // clears the fixed nav bar
pub const SECTION_ACTIVE_OFFSET_PX: f64 = 200.0;

// Notifications
pub const NOTIFICATION_TTL_MS: i32 = 5000;
