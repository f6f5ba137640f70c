// Host-side tests for the DOM contract and tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants as tuning;

#[test]
fn selectors_are_well_formed() {
    for sel in [
        CURSOR_DOT,
        CURSOR_OUTLINE,
        GALLERY_GRID,
        GALLERY_CARD,
        FILTER_BUTTON,
        MODAL,
        MODAL_IMAGE,
        MODAL_TITLE,
        MODAL_DESCRIPTION,
        MODAL_CATEGORY,
        MODAL_PREV,
        MODAL_NEXT,
        MODAL_CLOSE,
        NAV,
        NAV_LINKS,
        MENU_TOGGLE,
        STATS_BLOCK,
        TIMELINE_ITEM,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
        assert!(!sel.contains(' '), "{sel} should be a single class");
    }
}

#[test]
fn gallery_cards_count_as_interactive() {
    let interactive: Vec<&str> = INTERACTIVE.split(',').map(str::trim).collect();
    assert!(interactive.contains(&GALLERY_CARD));
    assert!(interactive.contains(&FILTER_BUTTON));
    assert!(interactive.contains(&"a"));
    assert!(interactive.contains(&"button"));
}

#[test]
fn contact_fields_cover_the_form() {
    assert_eq!(CONTACT_FIELDS, ["name", "email", "subject", "message"]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_timings_are_sane() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(STATS_THRESHOLD > REVEAL_THRESHOLD);
    assert!(LAZY_THRESHOLD > 0.0 && LAZY_THRESHOLD < REVEAL_THRESHOLD);

    assert!(tuning::LAG_FACTOR >= 1.0);
    assert!(tuning::CARD_EXIT_MS < tuning::CARD_ENTER_MS);
    assert!(tuning::CACHED_SWAP_DELAY_MS < tuning::MODAL_FADE_MS);
    assert!(tuning::NAV_SCROLLED_AFTER_PX < tuning::BACK_TO_TOP_AFTER_PX);
    assert!(tuning::LINK_MAX_ALPHA > 0.0 && tuning::LINK_MAX_ALPHA <= 1.0);
    assert!(tuning::PARTICLE_MIN_OPACITY + tuning::PARTICLE_OPACITY_SPAN <= 1.0);
    assert!(tuning::ATTRACTION_MAX_SPEED > tuning::PARTICLE_MAX_AXIS_SPEED);
}

#[test]
fn modal_fade_offset_is_small() {
    assert!(MODAL_FADE_OFFSET_PX > 0.0 && MODAL_FADE_OFFSET_PX < 100.0);
}
